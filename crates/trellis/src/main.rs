mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Init { lang, force } => commands::init::run(lang, force, cli.verbose),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show { json } => commands::config::show(json, cli.verbose),
            ConfigCommands::SetLanguage { lang } => {
                commands::config::set_language(lang, cli.verbose)
            }
        },
        Commands::Templates { json } => commands::templates::list(json),
        Commands::Render { name, lang } => commands::templates::render(&name, lang, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
