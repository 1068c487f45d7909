use super::consts::paths;
use crate::error::Result;
use crate::language::{supported_codes, Language};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// config.yaml schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Language the project's documentation is written in
    pub language: Language,
}

impl Config {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

/// Location of the config file for a project root
pub fn config_path(project_root: impl AsRef<Path>) -> PathBuf {
    project_root.as_ref().join(paths::CONFIG_FILE)
}

/// Load the project config, falling back to defaults
///
/// Never fails. A missing file yields the default config without touching
/// the disk. An unreadable or malformed file is discarded as a whole; a
/// parsed file with an unsupported `language` keeps its other fields and
/// gets the default language.
pub fn load(project_root: impl AsRef<Path>) -> Config {
    let path = config_path(project_root);

    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Config::default();
    }

    match read_document(&path) {
        Ok(document) => reconcile(Some(&document)),
        Err(e) => {
            warn!("Ignoring config at {}: {}", path.display(), e);
            reconcile(None)
        }
    }
}

/// Write the project config, replacing any existing file
///
/// The `.trellis` directory must already exist. The language is written
/// as-is; callers hold a [`Language`], so it is valid by construction.
pub fn save(project_root: impl AsRef<Path>, config: &Config) -> Result<()> {
    let path = config_path(project_root);
    std::fs::write(&path, render(config))?;
    debug!("Saved config to {} (language: {})", path.display(), config.language);
    Ok(())
}

/// Text written by [`save`]
pub fn render(config: &Config) -> String {
    format!(
        "# Trellis Configuration\n\n# Language for documentation ({})\nlanguage: {}\n",
        supported_codes().join("/"),
        config.language
    )
}

/// Parse config text into a generic YAML document
pub fn parse_document(content: &str) -> Result<Value> {
    Ok(serde_yaml::from_str(content)?)
}

/// Build a config from a parsed document, field by field
///
/// `None` (nothing usable was parsed) yields the default config. Fields that
/// are missing or invalid take their default value; unknown keys are ignored.
pub fn reconcile(document: Option<&Value>) -> Config {
    let defaults = Config::default();
    let Some(document) = document else {
        return defaults;
    };

    let language = match document.get("language") {
        Some(value) => Language::from_value(value).unwrap_or_else(|| {
            warn!(
                "Unsupported language {:?} in config, using '{}'",
                value, defaults.language
            );
            defaults.language
        }),
        None => defaults.language,
    };

    Config { language }
}

fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}
