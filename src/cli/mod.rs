pub mod completions;
pub mod init;
pub mod rank;

use clap::{Parser, Subcommand};

/// colorrank - rank the colours of a PNG image by frequency
#[derive(Parser, Debug)]
#[command(name = "colorrank")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub rank: rank::RankArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default colorrank.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
