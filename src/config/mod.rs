//! Configuration management for `minifyone.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── bundle     # [bundle]
//! │   └── serve      # [serve]
//! ├── error          # ConfigError
//! ├── util           # Config file discovery, path resolution
//! └── mod.rs         # Config (this file)
//! ```
//!
//! The config file is optional. When present, its directory becomes the
//! project root and relative paths inside it are resolved against that root.
//! CLI flags override file values and are used as given.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{BundleConfig, ServeConfig};

use util::{find_config_file, resolve_against};

use crate::cli::{BundleArgs, Cli, Commands};
use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "minifyone.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing minifyone.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Combiner settings
    #[serde(default)]
    pub bundle: BundleConfig,

    /// Delivery server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl Config {
    /// Load configuration and apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let name = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME));

        let mut config = match find_config_file(&name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map_or_else(|| cwd.clone(), Path::to_path_buf);
                config.config_path = Some(path);
                config
            }
            // An explicitly named config must exist
            None if cli.config.is_some() => return Err(ConfigError::NotFound(name).into()),
            None => Self {
                root: cwd,
                ..Self::default()
            },
        };

        config.resolve_paths();
        config.apply_cli(cli);
        Ok(config)
    }

    /// Load config from file path.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Anchor relative paths from the config file at the project root.
    fn resolve_paths(&mut self) {
        self.bundle.output_dir = resolve_against(&self.root, &self.bundle.output_dir);
        self.serve.root = resolve_against(&self.root, &self.serve.root);
    }

    /// Apply command-line overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Combine { bundle_args, .. } => self.apply_bundle_args(bundle_args),
            Commands::Serve {
                bundle_args,
                interface,
                port,
                root,
            } => {
                self.apply_bundle_args(bundle_args);
                if let Some(interface) = interface {
                    self.serve.interface = *interface;
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
                if let Some(root) = root {
                    self.serve.root = root.clone();
                }
            }
        }
    }

    fn apply_bundle_args(&mut self, args: &BundleArgs) {
        if let Some(dir) = &args.output_dir {
            self.bundle.output_dir = dir.clone();
        }
        if let Some(minify) = args.minify {
            self.bundle.minify = minify;
        }
        if args.no_minify {
            self.bundle.minify = false;
        }
        if args.strict {
            self.bundle.strict = true;
        }
    }
}

/// Parse a config string, asserting it has no unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Config {
    let (parsed, ignored) = Config::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
