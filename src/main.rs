mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_check, run_classify, run_extract};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            run_check(args)?;
        }
        Commands::Extract(args) => {
            run_extract(args)?;
        }
        Commands::Classify(args) => {
            run_classify(args)?;
        }
    }

    Ok(())
}
