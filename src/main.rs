use clap::Parser;
use colorrank::cli::{Cli, Commands};
use colorrank::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init(args)) => colorrank::cli::init::run(args, &Printer::new())?,
        Some(Commands::Completions(args)) => colorrank::cli::completions::run(args)?,
        None => colorrank::cli::rank::run(cli.rank)?,
    }

    Ok(())
}
