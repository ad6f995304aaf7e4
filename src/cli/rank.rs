//! Ranking command implementation.
//!
//! Reads one PNG from a file or stdin and writes the colour report either
//! next to the input file or to stdout.

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{Config, LayoutKind};
use crate::error::{RankError, Result};
use crate::extract::extract_bytes;
use crate::output::{display_path, plural, Printer};
use crate::rank::{Ranking, TieBreak};
use crate::render::{render_html, render_json, Format, Notation};

/// Rank the colours of a PNG image by frequency
#[derive(Args, Debug, Default)]
pub struct RankArgs {
    /// PNG file to read (default: stdin)
    #[arg(value_name = "FILE", conflicts_with = "file")]
    pub input: Option<PathBuf>,

    /// PNG file to read, same as FILE
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Sort most frequent colours first
    #[arg(short, long)]
    pub reverse: bool,

    /// Keep only the first N colours
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Table layout
    #[arg(long, value_enum)]
    pub layout: Option<LayoutKind>,

    /// Cells per row in grid layout
    #[arg(long)]
    pub columns: Option<usize>,

    /// Background colour notation
    #[arg(long, value_enum)]
    pub notation: Option<Notation>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Ordering of colours with equal counts
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,

    /// Output path ("-" for stdout; default: <FILE><suffix>, or stdout for stdin)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (default: ./colorrank.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl RankArgs {
    /// The input file, from either the positional argument or `--file`.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().or(self.file.as_deref())
    }

    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Result<Config> {
        config.reverse |= self.reverse;
        if self.top.is_some() {
            config.top = self.top;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(notation) = self.notation {
            config.notation = notation;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Where the report goes.
#[derive(Debug, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

pub fn run(args: RankArgs) -> Result<()> {
    let printer = Printer::new().quiet(args.quiet);
    let config = args.apply(Config::discover(args.config.as_deref(), Path::new("."))?)?;
    let input = args.input_path();

    let bytes = match input {
        Some(path) => {
            printer.status("Reading", &display_path(path));
            let file = File::open(path).map_err(|e| RankError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to open input: {}", e),
            })?;
            read_input(file, config.max_input_bytes)?
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                printer.warning("Waiting", "for PNG data on stdin");
            }
            read_input(stdin.lock(), config.max_input_bytes)?
        }
    };

    let table = extract_bytes(&bytes)?;
    printer.status(
        "Tallied",
        &format!(
            "{} from {}",
            plural(table.len() as u64, "colour", "colours"),
            plural(table.total(), "pixel", "pixels")
        ),
    );

    let ranking = config.ranker().rank(&table);
    if ranking.len() < table.len() {
        printer.info("Keeping", &format!("top {} of {}", ranking.len(), table.len()));
    }

    match destination(input, args.output.as_deref(), config.output_suffix()) {
        Destination::Stdout => write_report(&ranking, &config, io::stdout().lock())?,
        Destination::File(path) => {
            let file = File::create(&path).map_err(|e| RankError::Io {
                path: path.clone(),
                message: format!("Failed to create output: {}", e),
            })?;
            write_report(&ranking, &config, BufWriter::new(file)).map_err(|e| match e {
                RankError::IoError(e) => RankError::Io {
                    path: path.clone(),
                    message: format!("Failed to write report: {}", e),
                },
                other => other,
            })?;
            printer.success("Wrote", &display_path(&path));
        }
    }

    Ok(())
}

fn write_report<W: Write>(ranking: &Ranking, config: &Config, writer: W) -> Result<()> {
    match config.format {
        Format::Html => render_html(ranking, &config.html_options(), writer),
        Format::Json => render_json(ranking, writer),
    }
}

/// Read all of `reader`, failing once more than `limit` bytes arrive.
fn read_input<R: Read>(reader: R, limit: Option<u64>) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    match limit {
        Some(limit) => {
            reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
            if bytes.len() as u64 > limit {
                return Err(RankError::InputTooLarge { limit });
            }
        }
        None => {
            let mut reader = reader;
            reader.read_to_end(&mut bytes)?;
        }
    }
    Ok(bytes)
}

fn destination(input: Option<&Path>, output: Option<&Path>, suffix: &str) -> Destination {
    match (output, input) {
        (Some(out), _) if out == Path::new("-") => Destination::Stdout,
        (Some(out), _) => Destination::File(out.to_path_buf()),
        (None, Some(input)) => {
            let mut name = input.as_os_str().to_os_string();
            name.push(suffix);
            Destination::File(PathBuf::from(name))
        }
        (None, None) => Destination::Stdout,
    }
}
