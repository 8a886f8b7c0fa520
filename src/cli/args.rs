//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::bundle::{AssetKind, BundleError};

/// Combine, minify and serve CSS/JS bundles
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: minifyone.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Combine files into one cached bundle and print its path
    #[command(visible_alias = "c")]
    Combine {
        /// Asset type of the bundle (css or js)
        #[arg(short = 't', long = "type", value_name = "TYPE", value_parser = parse_kind)]
        kind: AssetKind,

        /// Input files, concatenated in the given order
        #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        bundle_args: BundleArgs,
    },

    /// Serve bundles over HTTP: GET /<name>.<css|js>?files=a,b
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        bundle_args: BundleArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory requested file paths are resolved against
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        root: Option<PathBuf>,
    },
}

/// Shared combiner arguments for Combine and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BundleArgs {
    /// Directory combined files are written to
    #[arg(short, long = "output-dir", value_hint = clap::ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Minify file contents before combining (`--minify=false` to disable)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub minify: Option<bool>,

    /// Copy file contents unchanged
    #[arg(long, conflicts_with = "minify")]
    pub no_minify: bool,

    /// Fail when an input file is missing instead of skipping it
    #[arg(short, long)]
    pub strict: bool,

    /// Enable verbose output for debugging (after the subcommand: `serve -V`)
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

fn parse_kind(s: &str) -> Result<AssetKind, BundleError> {
    s.parse()
}

impl Cli {
    pub fn bundle_args(&self) -> &BundleArgs {
        match &self.command {
            Commands::Combine { bundle_args, .. } | Commands::Serve { bundle_args, .. } => {
                bundle_args
            }
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.bundle_args().verbose
    }
}
