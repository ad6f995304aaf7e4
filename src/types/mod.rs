//! Core domain types for colorrank.
//!
//! - `Colour` - 16-bit RGBA colour values
//! - `FrequencyTable` - colour occurrence counts for one image
//! - `RankedEntry` - a (colour, count) pair in ranked order

mod colour;
mod frequency;

pub use colour::Colour;
pub use frequency::{FrequencyTable, RankedEntry};
