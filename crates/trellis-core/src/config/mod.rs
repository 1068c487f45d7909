//! Project configuration stored in `.trellis/config.yaml`
//!
//! Reading is fail-soft: a missing, unreadable or malformed file, or a field
//! holding an unsupported value, falls back to defaults. Writing is strict:
//! I/O errors are returned to the caller.

pub mod consts;
pub mod model;

pub use crate::language::is_valid_language;
pub use model::{config_path, load, parse_document, reconcile, render, save, Config};
