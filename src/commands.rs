use anyhow::Result;

use crate::cli::Cli;
use crate::convert::convert_file;
use crate::io::assert_not_stdout;

pub fn convert(cli: &Cli) -> Result<()> {
    assert_not_stdout(&cli.output)?;

    if cli.verbose > 0 {
        eprintln!("[convert] input={} -> {}", cli.input.display(), cli.output.display());
    }

    convert_file(&cli.input, &cli.output, cli.verbose)?;
    println!("Wrote: {}", cli.output.display());
    Ok(())
}
