//! # arcana-core
//!
//! Shared building blocks for the Arcana workspace:
//!
//! - [`Error`] / [`Result`]: the typed error every library crate can fold into
//! - [`ResultExt`]: combinators for call sites that degrade instead of failing
//! - [`config::load_file`]: TOML/JSON configuration loading

pub mod config;
pub mod error;
pub mod result;

pub use error::Error;
pub use result::{Result, ResultExt};
