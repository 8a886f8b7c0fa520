//! Combine an ordered file set into one cached output file.

use std::fs::{self, DirBuilder};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{AssetKind, BundleError, CacheKey, minify};
use crate::config::BundleConfig;
use crate::debug;

/// Combines input files into content-addressed cache entries.
///
/// Entries are named after the file list, not the file contents: once an
/// entry exists it is returned as-is, even if an input changed since.
#[derive(Debug, Clone)]
pub struct Combiner {
    output_dir: PathBuf,
    minify: bool,
    strict: bool,
}

impl Combiner {
    /// Create a combiner, creating the output directory if needed.
    pub fn new(config: &BundleConfig) -> Result<Self, BundleError> {
        create_output_dir(&config.output_dir)?;
        Ok(Self {
            output_dir: config.output_dir.clone(),
            minify: config.minify,
            strict: config.strict,
        })
    }

    /// Directory cache entries are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the cache entry for a file list, whether or not it exists yet.
    pub fn entry_path<P: AsRef<Path>>(
        &self,
        files: &[P],
        kind: AssetKind,
    ) -> Result<PathBuf, BundleError> {
        let key = CacheKey::from_files(files)?;
        Ok(self.output_dir.join(key.file_name(kind)))
    }

    /// Combine `files` in order and return the cache entry path.
    ///
    /// Missing inputs are skipped unless strict mode is on. An existing
    /// entry is returned without touching the inputs.
    pub fn combine<P: AsRef<Path>>(
        &self,
        files: &[P],
        kind: AssetKind,
    ) -> Result<PathBuf, BundleError> {
        let output = self.entry_path(files, kind)?;
        if output.exists() {
            debug!("cache"; "hit {}", output.display());
            return Ok(output);
        }

        let mut content = Vec::new();
        for file in files {
            let file = file.as_ref();
            if !file.is_file() {
                if self.strict {
                    return Err(BundleError::MissingInput {
                        path: file.to_path_buf(),
                    });
                }
                debug!("combine"; "skipping missing {}", file.display());
                continue;
            }

            let source = fs::read(file).map_err(|e| BundleError::io(file, e))?;
            if self.minify {
                let text = String::from_utf8_lossy(&source);
                content.extend_from_slice(minify::minify(&text, kind).as_bytes());
            } else {
                content.extend_from_slice(&source);
            }
            content.push(b'\n');
        }

        self.write_entry(&output, &content)?;
        debug!("cache"; "wrote {} ({} bytes)", output.display(), content.len());
        Ok(output)
    }

    /// Write via a temp file in the output directory, then rename into place.
    fn write_entry(&self, output: &Path, content: &[u8]) -> Result<(), BundleError> {
        let mut tmp = tempfile::Builder::new()
            .prefix(".minifyone-")
            .suffix(".tmp")
            .tempfile_in(&self.output_dir)
            .map_err(|e| BundleError::io(&self.output_dir, e))?;
        tmp.write_all(content)
            .map_err(|e| BundleError::io(tmp.path(), e))?;
        tmp.persist(output)
            .map_err(|e| BundleError::io(output, e.error))?;
        Ok(())
    }
}

fn create_output_dir(dir: &Path) -> Result<(), BundleError> {
    if dir.is_dir() {
        return Ok(());
    }
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir).map_err(|e| BundleError::io(dir, e))
}
