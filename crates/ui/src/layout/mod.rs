//! Layout algorithms for the card table.
//!
//! - `fan`: arc placement with optional hover repulsion

pub mod fan;
