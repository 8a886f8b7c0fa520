//! `combine` command: build one bundle and print its path.

use std::io::{Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::bundle::{AssetKind, Combiner};
use crate::config::Config;
use crate::debug;

/// Combine `files` and print the cache entry path on stdout.
pub fn run(config: &Config, files: &[PathBuf], kind: AssetKind) -> Result<()> {
    let path = combine_files(config, files, kind)?;
    writeln!(stdout().lock(), "{}", path.display())?;
    Ok(())
}

fn combine_files(config: &Config, files: &[PathBuf], kind: AssetKind) -> Result<PathBuf> {
    let combiner = Combiner::new(&config.bundle).with_context(|| {
        format!(
            "Failed to prepare output directory {}",
            config.bundle.output_dir.display()
        )
    })?;
    debug!("combine"; "{} file(s) into {}", files.len(), combiner.output_dir().display());

    combiner
        .combine(files, kind)
        .with_context(|| format!("Failed to combine {kind} bundle"))
}
