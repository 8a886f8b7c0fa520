//! `[bundle]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [bundle]
//! output_dir = "cache"   # Where combined files are written
//! minify = true          # Strip comments and collapse whitespace
//! strict = false         # Fail on missing inputs instead of skipping them
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Combiner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Directory for cache entries, created if absent.
    pub output_dir: PathBuf,

    /// Apply the minification pipeline before concatenating.
    pub minify: bool,

    /// Treat a missing input file as an error.
    pub strict: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("cache"),
            minify: true,
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::test_parse_config;

    #[test]
    fn test_bundle_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.bundle.output_dir, PathBuf::from("cache"));
        assert!(config.bundle.minify);
        assert!(!config.bundle.strict);
    }

    #[test]
    fn test_bundle_config() {
        let config = test_parse_config(
            "[bundle]\noutput_dir = \"public/bundles\"\nminify = false\nstrict = true",
        );
        assert_eq!(config.bundle.output_dir, PathBuf::from("public/bundles"));
        assert!(!config.bundle.minify);
        assert!(config.bundle.strict);
    }
}
