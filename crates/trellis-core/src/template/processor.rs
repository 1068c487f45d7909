//! Language placeholder substitution

use crate::error::Result;
use crate::language::{Language, LANGUAGE_PLACEHOLDER};

/// Replace the language placeholder with the prompt for `language`
///
/// Only the first occurrence is replaced. A template without the
/// placeholder is returned unchanged.
///
/// # Examples
///
/// ```
/// use trellis_core::template::process_template;
/// use trellis_core::Language;
///
/// let rendered = process_template("# Title\n{{LANGUAGE_PROMPT}}\n", Language::En);
/// assert_eq!(
///     rendered,
///     "# Title\nAll documentation should be written in **English**.\n"
/// );
/// ```
pub fn process_template(template: &str, language: Language) -> String {
    template.replacen(LANGUAGE_PLACEHOLDER, language.prompt(), 1)
}

/// Like [`process_template`], for a language given by its code
///
/// # Errors
///
/// Returns `TrellisError::InvalidLanguage` if `code` is not supported.
pub fn process_template_code(template: &str, code: &str) -> Result<String> {
    let language: Language = code.parse()?;
    Ok(process_template(template, language))
}
