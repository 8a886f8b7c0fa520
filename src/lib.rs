//! minifyone - combine, minify and serve CSS/JS bundles.
//!
//! ```ignore
//! use minifyone::{AssetKind, Combiner, config::BundleConfig};
//!
//! let combiner = Combiner::new(&BundleConfig::default())?;
//! let path = combiner.combine(&["a.css", "b.css"], AssetKind::Css)?;
//! ```

pub mod bundle;
pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
mod utils;

pub use bundle::{AssetKind, BundleError, Combiner, Served};
