#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # arcana-reading
//!
//! Turns the free-text prediction returned by the oracle into something a
//! display layer can lay out:
//!
//! - [`parse`] splits the text into an introduction, one titled section per
//!   card and a closing summary
//! - [`split_bold_spans`] breaks a paragraph into plain and `**bold**` runs
//!
//! Both functions are total and pure: they never fail and hold no state, so
//! they can be called on every render pass.
//!
//! ## Example
//!
//! ```
//! use arcana_reading::{parse, split_bold_spans};
//!
//! let parsed = parse("Seek within.\n---\n### The Star\nHope returns.\n---\n**Trust** yourself.");
//! assert_eq!(parsed.intro, "Seek within.");
//! assert_eq!(parsed.sections[0].title, "The Star");
//!
//! let spans = split_bold_spans(&parsed.summary);
//! assert!(spans[0].bold);
//! ```

pub mod emphasis;
pub mod parser;

pub use emphasis::{Span, split_bold_spans};
pub use parser::{ParsedPrediction, Section, parse};
