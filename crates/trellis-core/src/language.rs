//! Documentation language registry
//!
//! The closed set of languages a project's documentation can be written in,
//! together with the prompt sentence each one contributes to rendered
//! templates.
//!
//! ## Adding a language
//!
//! Add a variant to [`Language`] and extend [`SUPPORTED_LANGUAGES`]. The
//! `match` arms in [`Language::code`] and [`Language::prompt`] are exhaustive,
//! so the compiler points at every table that needs the new entry.

use crate::error::TrellisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder token substituted in templates
pub const LANGUAGE_PLACEHOLDER: &str = "{{LANGUAGE_PROMPT}}";

/// Supported languages, in display order
pub const SUPPORTED_LANGUAGES: [Language; 2] = [Language::En, Language::Zh];

/// Language used when nothing (valid) has been chosen
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// A supported documentation language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

impl Language {
    /// Short code as written in config files (`en`, `zh`)
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Instruction sentence that replaces [`LANGUAGE_PLACEHOLDER`]
    pub const fn prompt(self) -> &'static str {
        match self {
            Language::En => "All documentation should be written in **English**.",
            Language::Zh => "所有文档建议使用**中文**编写。",
        }
    }

    /// Look up a language by its exact code
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|language| language.code() == code)
    }

    /// Extract a language from a parsed config value
    ///
    /// Returns `None` for anything [`is_valid_language`] rejects.
    pub fn from_value(value: &serde_yaml::Value) -> Option<Self> {
        if !is_valid_language(value) {
            return None;
        }
        value.as_str().and_then(Self::from_code)
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| TrellisError::InvalidLanguage(s.to_string()))
    }
}

/// Codes of all supported languages, in display order
pub fn supported_codes() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES.iter().map(|l| l.code()).collect()
}

/// Check whether a parsed config value names a supported language
///
/// True only for a string equal to one of the supported codes. Null,
/// numbers, booleans, sequences, mappings and unknown strings are all
/// rejected. Matching is case-sensitive.
pub fn is_valid_language(value: &serde_yaml::Value) -> bool {
    match value {
        serde_yaml::Value::String(code) => SUPPORTED_LANGUAGES
            .iter()
            .any(|language| language.code() == code),
        _ => false,
    }
}
