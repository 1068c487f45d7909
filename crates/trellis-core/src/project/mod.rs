//! Project detection and initialisation

pub mod init;

pub use init::{init_project, InitOptions, InitReport};

use crate::config::consts::paths;
use std::path::{Path, PathBuf};

/// Find project root by searching for a `.trellis` directory
///
/// Searches `start` and then each of its ancestors. Returns `None` if no
/// directory on the way up contains `.trellis/`.
pub fn find_root(start: impl AsRef<Path>) -> Option<PathBuf> {
    start
        .as_ref()
        .ancestors()
        .find(|dir| dir.join(paths::TRELLIS_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Whether `root` has been initialised
pub fn is_initialized(root: impl AsRef<Path>) -> bool {
    root.as_ref().join(paths::TRELLIS_DIR).is_dir()
}
