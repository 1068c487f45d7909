//! Template module - language placeholder substitution over builtin templates
//!
//! ## Philosophy
//!
//! - **Single placeholder**: templates carry at most one `{{LANGUAGE_PROMPT}}`
//! - **No Markdown awareness**: substitution is plain text replacement
//! - **Builtin assets**: template files are embedded at compile time and never mutated
//!
//! ## Layout
//!
//! - `processor` - placeholder substitution
//! - `catalog` - the embedded template files and where each one lands in a project

pub mod catalog;
pub mod processor;

pub use catalog::{find, render, render_all, templates, RenderedTemplate, TemplateAsset};
pub use processor::{process_template, process_template_code};
