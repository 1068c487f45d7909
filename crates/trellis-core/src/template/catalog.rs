//! Builtin template catalog
//!
//! Every file a project is scaffolded with, embedded at compile time from
//! `templates/`. Structure templates are stored as `.md.txt` and land as
//! `.md` in the project.

use crate::error::{Result, TrellisError};
use crate::language::Language;
use crate::template::processor::process_template;

/// A builtin template file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateAsset {
    /// Logical name, e.g. `backend/index`
    pub name: &'static str,
    /// Destination relative to the project root
    pub target: &'static str,
    /// Raw file content
    pub content: &'static str,
}

/// A template with the language placeholder substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub name: &'static str,
    pub target: &'static str,
    pub content: String,
}

macro_rules! asset {
    ($name:literal, $target:literal, $file:literal) => {
        TemplateAsset {
            name: $name,
            target: $target,
            content: include_str!(concat!("../../templates/", $file)),
        }
    };
}

static CATALOG: &[TemplateAsset] = &[
    // Root files
    asset!("agents", "AGENTS.md", "agents.md"),
    asset!(
        "workspace-index",
        ".trellis/workspace/index.md",
        "workspace-index.md"
    ),
    asset!("gitignore", ".trellis/.gitignore", "gitignore.txt"),
    // Backend structure
    asset!(
        "backend/index",
        ".trellis/spec/backend/index.md",
        "spec/backend/index.md.txt"
    ),
    asset!(
        "backend/directory-structure",
        ".trellis/spec/backend/directory-structure.md",
        "spec/backend/directory-structure.md.txt"
    ),
    asset!(
        "backend/database-guidelines",
        ".trellis/spec/backend/database-guidelines.md",
        "spec/backend/database-guidelines.md.txt"
    ),
    asset!(
        "backend/logging-guidelines",
        ".trellis/spec/backend/logging-guidelines.md",
        "spec/backend/logging-guidelines.md.txt"
    ),
    asset!(
        "backend/quality-guidelines",
        ".trellis/spec/backend/quality-guidelines.md",
        "spec/backend/quality-guidelines.md.txt"
    ),
    asset!(
        "backend/error-handling",
        ".trellis/spec/backend/error-handling.md",
        "spec/backend/error-handling.md.txt"
    ),
    // Frontend structure
    asset!(
        "frontend/index",
        ".trellis/spec/frontend/index.md",
        "spec/frontend/index.md.txt"
    ),
    asset!(
        "frontend/directory-structure",
        ".trellis/spec/frontend/directory-structure.md",
        "spec/frontend/directory-structure.md.txt"
    ),
    asset!(
        "frontend/type-safety",
        ".trellis/spec/frontend/type-safety.md",
        "spec/frontend/type-safety.md.txt"
    ),
    asset!(
        "frontend/hook-guidelines",
        ".trellis/spec/frontend/hook-guidelines.md",
        "spec/frontend/hook-guidelines.md.txt"
    ),
    asset!(
        "frontend/component-guidelines",
        ".trellis/spec/frontend/component-guidelines.md",
        "spec/frontend/component-guidelines.md.txt"
    ),
    asset!(
        "frontend/quality-guidelines",
        ".trellis/spec/frontend/quality-guidelines.md",
        "spec/frontend/quality-guidelines.md.txt"
    ),
    asset!(
        "frontend/state-management",
        ".trellis/spec/frontend/state-management.md",
        "spec/frontend/state-management.md.txt"
    ),
    // Guides
    asset!(
        "guides/index",
        ".trellis/spec/guides/index.md",
        "spec/guides/index.md.txt"
    ),
    asset!(
        "guides/cross-layer-thinking-guide",
        ".trellis/spec/guides/cross-layer-thinking-guide.md",
        "spec/guides/cross-layer-thinking-guide.md.txt"
    ),
    asset!(
        "guides/code-reuse-thinking-guide",
        ".trellis/spec/guides/code-reuse-thinking-guide.md",
        "spec/guides/code-reuse-thinking-guide.md.txt"
    ),
];

/// All builtin templates, in scaffolding order
pub fn templates() -> &'static [TemplateAsset] {
    CATALOG
}

/// Get builtin template by name
pub fn find(name: &str) -> Option<&'static TemplateAsset> {
    CATALOG.iter().find(|asset| asset.name == name)
}

/// Render a single builtin template
pub fn render(name: &str, language: Language) -> Result<String> {
    let asset = find(name).ok_or_else(|| TrellisError::TemplateNotFound(name.to_string()))?;
    Ok(process_template(asset.content, language))
}

/// Render every builtin template
pub fn render_all(language: Language) -> Vec<RenderedTemplate> {
    CATALOG
        .iter()
        .map(|asset| RenderedTemplate {
            name: asset.name,
            target: asset.target,
            content: process_template(asset.content, language),
        })
        .collect()
}
