//! Asset kind definitions.

use std::fmt;
use std::str::FromStr;

use super::BundleError;
use crate::utils::mime;

/// Kind of combinable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Stylesheet (`.css`).
    Css,
    /// Script (`.js`).
    Js,
}

impl AssetKind {
    /// File extension used for the combined output.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    /// Content-Type sent when delivering the combined file.
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Css => mime::types::CSS,
            Self::Js => mime::types::JAVASCRIPT,
        }
    }
}

impl FromStr for AssetKind {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "css" => Ok(Self::Css),
            "js" => Ok(Self::Js),
            other => Err(BundleError::InvalidType(other.to_string())),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("css".parse::<AssetKind>().unwrap(), AssetKind::Css);
        assert_eq!("js".parse::<AssetKind>().unwrap(), AssetKind::Js);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["", "CSS", "ts", "html", " js"] {
            let err = bad.parse::<AssetKind>().unwrap_err();
            assert!(matches!(err, BundleError::InvalidType(ref t) if t == bad));
        }
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(AssetKind::Css.mime_type(), "text/css");
        assert_eq!(AssetKind::Js.mime_type(), "application/javascript");
    }
}
