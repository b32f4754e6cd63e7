use anyhow::Result;
use clap::Parser;

use pipeflow::cli::Cli;
use pipeflow::commands;

fn main() -> Result<()> {
    // Usage errors exit with 1; --help/--version print to stdout and exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(if err.use_stderr() { 1 } else { 0 })
    });
    commands::convert(&cli)
}
