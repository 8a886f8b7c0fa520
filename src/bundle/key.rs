//! Cache key derivation for file sets.
//!
//! The key is a blake3 digest of the file list serialized as a JSON array,
//! so it depends on the order of the paths but never on their contents.

use std::fmt;
use std::path::Path;

use super::{AssetKind, BundleError};

/// File name prefix shared by every cache entry.
pub const ENTRY_PREFIX: &str = "minifyone_";

/// Digest of an ordered file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey([u8; 32]);

impl CacheKey {
    /// Derive the key for an ordered list of paths.
    pub fn from_files<P: AsRef<Path>>(files: &[P]) -> Result<Self, BundleError> {
        let list: Vec<_> = files
            .iter()
            .map(|p| p.as_ref().to_string_lossy())
            .collect();
        let serialized = serde_json::to_vec(&list)?;
        Ok(Self(*blake3::hash(&serialized).as_bytes()))
    }

    /// Lowercase hex form used in file names.
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    /// Cache entry file name: `minifyone_{hex}.{ext}`.
    pub fn file_name(self, kind: AssetKind) -> String {
        format!("{ENTRY_PREFIX}{}.{}", self.to_hex(), kind.extension())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form for log lines
        write!(f, "{}", &self.to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic() {
        let a = CacheKey::from_files(&["a.css", "b.css"]).unwrap();
        let b = CacheKey::from_files(&["a.css", "b.css"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_hex().len(), 64);
    }

    #[test]
    fn test_key_is_order_sensitive() {
        let ab = CacheKey::from_files(&["a.css", "b.css"]).unwrap();
        let ba = CacheKey::from_files(&["b.css", "a.css"]).unwrap();
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_key_keeps_duplicates() {
        let once = CacheKey::from_files(&["a.js"]).unwrap();
        let twice = CacheKey::from_files(&["a.js", "a.js"]).unwrap();
        assert_ne!(once, twice);
    }

    #[test]
    fn test_key_does_not_split_on_separators() {
        // JSON framing keeps ["a,b"] and ["a", "b"] apart
        let joined = CacheKey::from_files(&["a,b"]).unwrap();
        let split = CacheKey::from_files(&["a", "b"]).unwrap();
        assert_ne!(joined, split);
    }

    #[test]
    fn test_file_name() {
        let key = CacheKey::from_files(&["app.js"]).unwrap();
        let name = key.file_name(AssetKind::Js);
        assert!(name.starts_with("minifyone_"));
        assert!(name.ends_with(".js"));
        assert_eq!(name.len(), "minifyone_".len() + 64 + ".js".len());
    }
}
