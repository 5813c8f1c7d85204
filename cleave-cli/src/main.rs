//! The `cleave` command

use clap::Parser;
use cleave_cli::commands::ProcessArgs;
use cleave_cli::CliResult;

fn main() -> CliResult<()> {
    let args = ProcessArgs::parse();
    args.execute()?;
    Ok(())
}
