//! Configuration file (colorrank.yaml) parsing.
//!
//! Every field is optional. Command-line flags are applied on top of the
//! loaded values by the CLI.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};
use crate::rank::{Ranker, SortOrder, TieBreak};
use crate::render::{Format, HtmlOptions, Layout, Notation, DEFAULT_COLUMNS};

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "colorrank.yaml";

/// Contents written by `colorrank init`.
pub const DEFAULT_CONFIG: &str = "\
# colorrank configuration
reverse: false
# top: 32
layout: column        # column | grid
columns: 10           # cells per row in grid layout
notation: hex         # hex | rgb
format: html          # html | json
tie_break: unspecified  # unspecified | colour
# suffix: .html
# max_input_bytes: 67108864
";

/// Table layout as named in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Column,
    Grid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rank most frequent first.
    pub reverse: bool,

    /// Keep only this many entries.
    pub top: Option<usize>,

    pub layout: LayoutKind,

    /// Cells per row for the grid layout.
    pub columns: usize,

    pub notation: Notation,

    pub format: Format,

    pub tie_break: TieBreak,

    /// Suffix for sibling output files. Defaults per format.
    pub suffix: Option<String>,

    /// Reject inputs larger than this many bytes.
    pub max_input_bytes: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reverse: false,
            top: None,
            layout: LayoutKind::Column,
            columns: DEFAULT_COLUMNS,
            notation: Notation::Hex,
            format: Format::Html,
            tie_break: TieBreak::Unspecified,
            suffix: None,
            max_input_bytes: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RankError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An all-comment file deserializes as null.
        if content.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| RankError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else `colorrank.yaml` in `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(RankError::Config {
                message: "columns must be at least 1".to_string(),
                help: None,
            });
        }

        if matches!(&self.suffix, Some(s) if s.is_empty()) {
            return Err(RankError::Config {
                message: "suffix must not be empty".to_string(),
                help: Some("Omit suffix to use the format default".to_string()),
            });
        }

        Ok(())
    }

    pub fn order(&self) -> SortOrder {
        SortOrder::from_reverse(self.reverse)
    }

    pub fn ranker(&self) -> Ranker {
        Ranker::new(self.order())
            .tie_break(self.tie_break)
            .limit(self.top)
    }

    pub fn html_options(&self) -> HtmlOptions {
        let layout = match self.layout {
            LayoutKind::Column => Layout::Column,
            LayoutKind::Grid => Layout::Grid {
                columns: self.columns,
            },
        };

        HtmlOptions {
            layout,
            notation: self.notation,
        }
    }

    /// Suffix appended to the input path when writing a sibling report.
    pub fn output_suffix(&self) -> &str {
        self.suffix
            .as_deref()
            .unwrap_or_else(|| self.format.default_suffix())
    }
}
