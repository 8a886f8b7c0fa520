//! Request routing for bundle URLs.
//!
//! ```text
//! GET /site.css?files=base.css,theme/dark.css   → css bundle of 2 files
//! GET /app.js?files=vendor.js&files=main.js     → js bundle of 2 files
//! ```
//!
//! The asset type comes from the last path segment's extension. File paths
//! are relative to the serve root and may not climb out of it.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tiny_http::Method;
use url::Url;

use crate::bundle::AssetKind;

/// Parsed bundle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRoute {
    pub kind: AssetKind,
    /// Requested files, relative to the serve root, in request order.
    pub files: Vec<PathBuf>,
}

impl BundleRoute {
    /// Join every requested file onto `root`.
    pub fn resolve(&self, root: &Path) -> Vec<PathBuf> {
        self.files.iter().map(|f| root.join(f)).collect()
    }
}

/// Why a request cannot be served as a bundle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("405 Method Not Allowed")]
    MethodNotAllowed,

    #[error("404 Not Found")]
    NotFound,

    #[error("400 Bad Request: {0}")]
    BadRequest(String),
}

impl RouteError {
    pub const fn status(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::NotFound => 404,
            Self::BadRequest(_) => 400,
        }
    }
}

/// Parse a request line into a bundle route.
pub fn parse(method: &Method, raw_url: &str) -> Result<BundleRoute, RouteError> {
    if !matches!(method, Method::Get | Method::Head) {
        return Err(RouteError::MethodNotAllowed);
    }

    let url = Url::parse(&format!("http://localhost{raw_url}"))
        .map_err(|e| RouteError::BadRequest(e.to_string()))?;

    let name = url.path().rsplit('/').next().unwrap_or_default();
    let ext = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => return Err(RouteError::NotFound),
    };
    let kind = ext
        .parse::<AssetKind>()
        .map_err(|e| RouteError::BadRequest(e.to_string()))?;

    let mut files = Vec::new();
    for (key, value) in url.query_pairs() {
        if key != "files" {
            continue;
        }
        for file in value.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            files.push(checked_relative(file)?);
        }
    }

    if files.is_empty() {
        return Err(RouteError::BadRequest("no files requested".into()));
    }

    Ok(BundleRoute { kind, files })
}

/// Accept only plain relative paths (no root, prefix or `..`).
fn checked_relative(file: &str) -> Result<PathBuf, RouteError> {
    let path = Path::new(file);
    let plain = path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if plain {
        Ok(path.to_path_buf())
    } else {
        Err(RouteError::BadRequest(format!(
            "path '{file}' escapes the serve root"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(url: &str) -> Result<BundleRoute, RouteError> {
        parse(&Method::Get, url)
    }

    #[test]
    fn test_parse_comma_list() {
        let route = get("/site.css?files=base.css,theme/dark.css").unwrap();
        assert_eq!(route.kind, AssetKind::Css);
        assert_eq!(
            route.files,
            vec![PathBuf::from("base.css"), PathBuf::from("theme/dark.css")]
        );
    }

    #[test]
    fn test_parse_repeated_param_keeps_order() {
        let route = get("/bundles/app.js?files=vendor.js&v=3&files=main.js,vendor.js").unwrap();
        assert_eq!(route.kind, AssetKind::Js);
        assert_eq!(
            route.files,
            vec![
                PathBuf::from("vendor.js"),
                PathBuf::from("main.js"),
                PathBuf::from("vendor.js"),
            ]
        );
    }

    #[test]
    fn test_parse_percent_encoded() {
        let route = get("/a.css?files=my%20styles.css%2Cb.css").unwrap();
        assert_eq!(
            route.files,
            vec![PathBuf::from("my styles.css"), PathBuf::from("b.css")]
        );
    }

    #[test]
    fn test_head_is_allowed() {
        assert!(parse(&Method::Head, "/a.js?files=a.js").is_ok());
        assert_eq!(
            parse(&Method::Post, "/a.js?files=a.js"),
            Err(RouteError::MethodNotAllowed)
        );
    }

    #[test]
    fn test_unknown_type_is_bad_request() {
        let err = get("/a.ts?files=a.ts").unwrap_err();
        assert_eq!(err.status(), 400);
        assert!(err.to_string().contains("type must be 'css' or 'js'"));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(get("/"), Err(RouteError::NotFound));
        assert_eq!(get("/favicon"), Err(RouteError::NotFound));
        assert_eq!(get("/.css?files=a.css"), Err(RouteError::NotFound));
    }

    #[test]
    fn test_no_files() {
        assert_eq!(
            get("/a.css"),
            Err(RouteError::BadRequest("no files requested".into()))
        );
        assert!(get("/a.css?files=,,").is_err());
    }

    #[test]
    fn test_rejects_escaping_paths() {
        for bad in ["../secret.css", "a/../../b.css", "/etc/passwd"] {
            let err = get(&format!("/a.css?files={bad}")).unwrap_err();
            assert_eq!(err.status(), 400, "{bad}");
        }
        assert!(get("/a.css?files=./ok.css").is_ok());
    }

    #[test]
    fn test_resolve_against_root() {
        let route = get("/a.css?files=x.css,sub/y.css").unwrap();
        assert_eq!(
            route.resolve(Path::new("/srv/assets")),
            vec![
                PathBuf::from("/srv/assets/x.css"),
                PathBuf::from("/srv/assets/sub/y.css"),
            ]
        );
    }
}
