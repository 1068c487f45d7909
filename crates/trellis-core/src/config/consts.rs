//! Project layout constants

/// Locations relative to the project root
pub mod paths {
    /// Directory holding all Trellis-managed files
    pub const TRELLIS_DIR: &str = ".trellis";

    /// Config file, relative to the project root
    pub const CONFIG_FILE: &str = ".trellis/config.yaml";
}
