//! Project fixtures for testing
//!
//! Helpers that lay out `.trellis/` content by hand, so tests can feed the
//! config loader files it did not write itself.

use std::path::{Path, PathBuf};

/// Create `root/.trellis/` and return its path
///
/// # Panics
///
/// Panics if the directory cannot be created.
pub fn create_trellis_dir(root: &Path) -> PathBuf {
    let dir = root.join(".trellis");
    std::fs::create_dir_all(&dir).expect("Failed to create .trellis directory");
    dir
}

/// Write raw `content` to `root/.trellis/config.yaml` and return its path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_config_file(root: &Path, content: impl AsRef<[u8]>) -> PathBuf {
    let path = create_trellis_dir(root).join("config.yaml");
    std::fs::write(&path, content).expect("Failed to write config.yaml");
    path
}
