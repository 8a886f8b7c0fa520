//! Command-line interface module.

mod args;
pub mod combine;
pub mod serve;

pub use args::{BundleArgs, Cli, Commands};
