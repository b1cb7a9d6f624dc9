#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Arcana
//!
//! Tarot readings from the command line: ask a question, draw cards from the
//! fan, and read the prediction returned by the oracle service.
//!
//! The binary is a thin layer over the workspace crates, re-exported here.

pub use arcana_core;
pub use arcana_oracle;
pub use arcana_reading;
pub use arcana_ui;

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
