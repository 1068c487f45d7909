//! Project scaffold creation

use crate::config::{self, consts::paths, Config};
use crate::error::Result;
use crate::language::Language;
use crate::template::render_all;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for [`init_project`]
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Language written to the config and used to render templates
    pub language: Language,
    /// Overwrite template files that already exist
    pub force: bool,
}

/// Files touched by [`init_project`], relative to the project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Initialise a project in `root`
///
/// Creates the following structure:
/// - .trellis/config.yaml (always rewritten)
/// - .trellis/.gitignore
/// - .trellis/workspace/index.md
/// - .trellis/spec/{backend,frontend,guides}/*.md
/// - AGENTS.md
///
/// Template files that already exist are left alone unless
/// `options.force` is set.
///
/// # Errors
///
/// Returns error if a directory cannot be created or a file cannot be written.
pub fn init_project(root: impl AsRef<Path>, options: &InitOptions) -> Result<InitReport> {
    let root = root.as_ref();
    let mut report = InitReport::default();

    fs::create_dir_all(root.join(paths::TRELLIS_DIR))?;
    config::save(root, &Config::new(options.language))?;
    report.written.push(PathBuf::from(paths::CONFIG_FILE));

    for template in render_all(options.language) {
        let relative = PathBuf::from(template.target);
        let target = root.join(&relative);

        if target.exists() && !options.force {
            debug!("Skipping existing {}", target.display());
            report.skipped.push(relative);
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, template.content)?;
        debug!("Wrote {} from template '{}'", target.display(), template.name);
        report.written.push(relative);
    }

    Ok(report)
}
