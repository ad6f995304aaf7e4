//! colorrank - colour frequency reports for PNG images
//!
//! Decodes an image, counts every exact colour, ranks the colours by how
//! often they occur, and renders the ranking as an HTML swatch table.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod rank;
pub mod render;
pub mod types;

pub use config::{Config, LayoutKind, CONFIG_FILENAME};
pub use error::{RankError, Result};
pub use extract::{decode, extract, extract_bytes, tally};
pub use rank::{rank, top_n, Ranker, Ranking, SortOrder, TieBreak};
pub use render::{html_string, render_html, render_json, Format, HtmlOptions, Layout, Notation};
pub use types::{Colour, FrequencyTable, RankedEntry};
