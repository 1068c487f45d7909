use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrellisError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse config: {0}")]
    ConfigParseError(String),

    // Language errors
    #[error(
        "INVALID_LANGUAGE: '{0}' is not a supported language (expected one of: {})",
        crate::language::supported_codes().join(", ")
    )]
    InvalidLanguage(String),

    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template '{0}' not found")]
    TemplateNotFound(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for TrellisError {
    fn from(err: serde_yaml::Error) -> Self {
        TrellisError::ConfigParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrellisError>;
