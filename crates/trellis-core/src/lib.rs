// Core modules
pub mod config;
pub mod error;
pub mod language;
pub mod project;
pub mod template;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TrellisError};
pub use language::{Language, DEFAULT_LANGUAGE, LANGUAGE_PLACEHOLDER, SUPPORTED_LANGUAGES};
