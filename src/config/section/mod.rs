//! Configuration section definitions.

mod bundle;
mod serve;

pub use bundle::BundleConfig;
pub use serve::ServeConfig;
