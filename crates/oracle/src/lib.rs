#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # arcana-oracle
//!
//! Client for the prediction service that interprets a tarot draw.
//!
//! The service takes a question and the selected card indices and answers with
//! the drawn cards plus a free-text prediction. [`OracleClient::predict`]
//! reports every failure; [`OracleClient::consult`] never fails and returns a
//! fallback [`Reading`] instead.
//!
//! ## Example
//!
//! ```ignore
//! use arcana_oracle::{OracleClient, OracleConfig};
//!
//! let client = OracleClient::with_config(OracleConfig::from_env())?;
//! let reading = client.consult("What should I focus on?", &[3, 14, 40]).await;
//!
//! for (card, section) in reading.interpretations() {
//!     println!("{}: {:?}", card.name, section.map(|s| &s.content));
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod reading;
pub mod types;

pub use client::OracleClient;
pub use config::{DEFAULT_FALLBACK_MESSAGE, OracleConfig};
pub use error::{Error, Result};
pub use reading::Reading;
pub use types::{CardInfo, PredictionRequest, PredictionResponse};
