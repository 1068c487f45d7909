//! Template commands - list and render builtin templates

use crate::context::Context;
use crate::output::{print_json, print_raw};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use trellis_core::Language;
use trellis_core::template;

#[derive(Serialize)]
struct TemplateEntry {
    name: &'static str,
    target: &'static str,
}

/// List builtin templates
pub fn list(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = template::templates()
            .iter()
            .map(|asset| TemplateEntry {
                name: asset.name,
                target: asset.target,
            })
            .collect();
        print_json(&serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    for asset in template::templates() {
        println!("{:<36} {}", asset.name.bold(), asset.target);
    }

    Ok(())
}

/// Print a builtin template rendered for a language
///
/// # Arguments
///
/// * `name` - Template name
/// * `lang` - Language to render with. If None, uses the project config
/// * `verbose` - Enable verbose output if true
pub fn render(name: &str, lang: Option<Language>, verbose: bool) -> Result<()> {
    let language = match lang {
        Some(language) => language,
        None => Context::new(verbose)?.config.language,
    };

    if verbose {
        eprintln!(
            "{} Rendering '{}' (language: {})",
            "→".cyan(),
            name,
            language
        );
    }

    let rendered = template::render(name, language)?;
    print_raw(&rendered)?;

    Ok(())
}
