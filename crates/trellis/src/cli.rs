//! CLI command structure using clap

use clap::{Parser, Subcommand};
use trellis_core::Language;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version, about = "Scaffold and maintain project documentation guidelines", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialise Trellis in the current directory
    Init {
        /// Documentation language (en, zh). Defaults to the existing config
        #[arg(short, long, value_parser = parse_language)]
        lang: Option<Language>,

        /// Overwrite documentation files that already exist
        #[arg(short, long)]
        force: bool,
    },

    /// Project configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// List builtin templates
    Templates {
        #[arg(long)]
        json: bool,
    },

    /// Print a builtin template rendered for a language
    Render {
        /// Template name (see `trellis templates`)
        name: String,

        /// Documentation language (en, zh). Defaults to the project config
        #[arg(short, long, value_parser = parse_language)]
        lang: Option<Language>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Change the documentation language
    SetLanguage {
        /// New language (en, zh)
        #[arg(value_parser = parse_language)]
        lang: Language,
    },
}

fn parse_language(value: &str) -> Result<Language, String> {
    value.parse::<Language>().map_err(|e| e.to_string())
}
