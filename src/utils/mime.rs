//! MIME type constants for HTTP responses.

/// Content types sent by the delivery server.
pub mod types {
    pub const CSS: &str = "text/css";
    pub const JAVASCRIPT: &str = "application/javascript";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
}
