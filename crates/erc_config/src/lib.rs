//! Parsing and loading of `erc.toml` configuration files.
//!
//! This crate reads an `erc.toml` file and produces a fully-populated
//! [`Options`](erc_model::Options) for the rule engine. `Options` itself
//! lives in `erc_model` since it's part of the shared data model;
//! this crate only owns file I/O, parsing, and error reporting.

#![warn(missing_docs)]

pub mod error;
pub mod loader;

pub use error::ConfigError;
pub use loader::{load_options, load_options_from_str};
