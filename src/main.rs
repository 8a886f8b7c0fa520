//! minifyone - combine, minify and serve CSS/JS bundles.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use minifyone::cli::{self, Cli, Commands};
use minifyone::config::Config;
use minifyone::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.is_verbose());

    let config = Config::load(&cli)?;

    match &cli.command {
        Commands::Combine { files, kind, .. } => cli::combine::run(&config, files, *kind),
        Commands::Serve { .. } => {
            minifyone::core::setup_shutdown_handler()?;
            cli::serve::serve(&config)
        }
    }
}
