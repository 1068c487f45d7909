//! Init command - scaffold .trellis/ and the documentation templates

use anyhow::Result;
use colored::Colorize;
use std::env;
use trellis_core::config;
use trellis_core::project::{InitOptions, init_project};
use trellis_core::Language;

/// Initialise Trellis in the current directory
///
/// # Arguments
///
/// * `lang` - Documentation language. If None, keeps the language of an existing config
/// * `force` - Overwrite documentation files that already exist
/// * `verbose` - Enable verbose output if true
pub fn run(lang: Option<Language>, force: bool, verbose: bool) -> Result<()> {
    let root = env::current_dir()?;
    let language = lang.unwrap_or_else(|| config::load(&root).language);

    if verbose {
        println!(
            "{} Initialising Trellis in {} (language: {})",
            "→".cyan(),
            root.display(),
            language
        );
    }

    let report = init_project(&root, &InitOptions { language, force })?;

    if verbose {
        for path in &report.written {
            println!("  {} {}", "+".green(), path.display());
        }
    }
    for path in &report.skipped {
        println!(
            "  {} {} already exists (use --force to overwrite)",
            "!".yellow(),
            path.display()
        );
    }

    println!(
        "{} Initialised Trellis ({} written, {} skipped, language: {})",
        "✓".green().bold(),
        report.written.len(),
        report.skipped.len(),
        language
    );

    print_next_steps();

    Ok(())
}

/// Print next steps after initialisation
fn print_next_steps() {
    println!("\n{} Next steps:", "→".cyan());
    println!("  1. Fill in .trellis/spec/ with your project's conventions");
    println!("  2. Point your coding agent at AGENTS.md");
}
