//! Global context for CLI commands

use anyhow::Result;
use log::debug;
use std::env;
use std::path::PathBuf;
use trellis_core::config::{self, Config};
use trellis_core::project;

/// Project root and its effective config
pub struct Context {
    pub root: PathBuf,
    pub config: Config,
    pub initialized: bool,
    pub verbose: bool,
}

impl Context {
    /// Resolve the project from the current directory
    ///
    /// The nearest ancestor containing `.trellis/` is the project root. Outside
    /// a project the current directory is used and the config is the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined
    pub fn new(verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let found = project::find_root(&current_dir);
        let initialized = found.is_some();
        let root = found.unwrap_or(current_dir);
        debug!("Project root: {} (initialized: {})", root.display(), initialized);

        let config = config::load(&root);

        Ok(Self {
            root,
            config,
            initialized,
            verbose,
        })
    }
}
