//! Asset bundling: combine, minify, cache and deliver.
//!
//! # Module Structure
//!
//! ```text
//! bundle/
//! ├── combiner   # Combiner: ordered file set → cached entry path
//! ├── deliver    # HTTP delivery of a cached entry
//! ├── error      # BundleError
//! ├── key        # CacheKey derived from the file list
//! ├── kind       # AssetKind (css | js)
//! └── minify     # Regex substitution pipelines
//! ```
//!
//! Cache entries live at `{output_dir}/minifyone_{key}.{ext}` and are
//! never invalidated or removed by this crate.

mod combiner;
mod deliver;
mod error;
mod key;
mod kind;
pub mod minify;

pub use combiner::Combiner;
pub use deliver::{CACHE_CONTROL, Delivery, Served, respond_text};
pub use error::BundleError;
pub use key::{CacheKey, ENTRY_PREFIX};
pub use kind::AssetKind;
