//! Report rendering.
//!
//! Renderers only depend on the iteration contract of [`crate::rank::Ranking`].

mod html;
mod json;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use html::{html_string, render_html, HtmlOptions, Layout, Notation, DEFAULT_COLUMNS};
pub use json::render_json;

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Json,
}

impl Format {
    /// Suffix appended to the input path for sibling output files.
    pub fn default_suffix(self) -> &'static str {
        match self {
            Format::Html => ".html",
            Format::Json => ".json",
        }
    }
}
