//! Config command - show or change .trellis/config.yaml

use crate::context::Context;
use crate::output::print_json;
use anyhow::{Result, bail};
use colored::Colorize;
use serde::Serialize;
use trellis_core::config::{self, Config};
use trellis_core::Language;

#[derive(Serialize)]
struct ConfigReport<'a> {
    root: String,
    initialized: bool,
    #[serde(flatten)]
    config: &'a Config,
}

/// Show the effective configuration
pub fn show(json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;

    if json {
        let report = ConfigReport {
            root: ctx.root.display().to_string(),
            initialized: ctx.initialized,
            config: &ctx.config,
        };
        print_json(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if ctx.verbose {
        println!(
            "{} Config file: {}",
            "→".cyan(),
            config::config_path(&ctx.root).display()
        );
    }
    if !ctx.initialized {
        println!("{} Not a Trellis project, showing defaults", "!".yellow());
    }
    println!("language: {}", ctx.config.language);

    Ok(())
}

/// Change the documentation language
///
/// # Errors
///
/// Fails outside a Trellis project, or if the config cannot be written
pub fn set_language(lang: Language, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;

    if !ctx.initialized {
        bail!("Not a Trellis project (no .trellis/ found). Run `trellis init` first");
    }

    let previous = ctx.config.language;
    config::save(&ctx.root, &Config::new(lang))?;

    if ctx.verbose {
        println!(
            "{} Wrote {}",
            "→".cyan(),
            config::config_path(&ctx.root).display()
        );
    }
    println!(
        "{} Language set to '{}' (was '{}')",
        "✓".green().bold(),
        lang,
        previous
    );

    Ok(())
}
