//! HTTP delivery of combined bundles.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tiny_http::{Header, Request, Response, StatusCode};

use super::{AssetKind, Combiner};
use crate::utils::mime;

/// One year, never revalidated: entry names change whenever the file list does.
pub const CACHE_CONTROL: &str = "max-age=31536000, immutable";

/// Marker proving a response was sent for a request.
///
/// The request is consumed by the call that produced it, so nothing else
/// can respond to it afterwards.
#[must_use = "a served request ends the handler"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Served;

/// A combined file ready to be sent.
#[derive(Debug, Clone)]
pub struct Delivery {
    path: PathBuf,
    kind: AssetKind,
}

impl Delivery {
    pub fn new(path: PathBuf, kind: AssetKind) -> Self {
        Self { path, kind }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content_type(&self) -> &'static str {
        self.kind.mime_type()
    }

    pub fn cache_control(&self) -> &'static str {
        CACHE_CONTROL
    }

    /// Build a 200 response streaming the file from disk.
    pub fn into_response(self) -> Result<Response<File>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        Ok(Response::from_file(file)
            .with_status_code(StatusCode(200))
            .with_header(header("Content-Type", self.content_type())?)
            .with_header(header("Cache-Control", self.cache_control())?))
    }

    /// Send the file and finish the request.
    pub fn send(self, request: Request) -> Result<Served> {
        let response = self.into_response()?;
        request.respond(response)?;
        Ok(Served)
    }
}

impl Combiner {
    /// Combine `files` and stream the result to `request`.
    ///
    /// On failure the request still gets a 500 response before the error
    /// is returned.
    pub fn combine_and_serve<P: AsRef<Path>>(
        &self,
        request: Request,
        files: &[P],
        kind: AssetKind,
    ) -> Result<Served> {
        match self.combine(files, kind) {
            Ok(path) => Delivery::new(path, kind).send(request),
            Err(e) => {
                let _ = respond_text(request, 500, "500 Internal Server Error");
                Err(anyhow!(e).context(format!("failed to combine {} bundle", kind)))
            }
        }
    }
}

/// Send a short plain-text response.
pub fn respond_text(request: Request, status: u16, body: &str) -> Result<Served> {
    let response = Response::from_string(body)
        .with_status_code(StatusCode(status))
        .with_header(header("Content-Type", mime::types::PLAIN)?);
    request.respond(response)?;
    Ok(Served)
}

pub(crate) fn header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}
