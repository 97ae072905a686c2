use clap::Parser;
use miette::Result;
use tiler::cli::split::{self, SplitOptions};
use tiler::cli::Cli;
use tiler::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    let manifest = split::run(&SplitOptions::new(cli.input), &printer)?;
    print!("{}", manifest);

    Ok(())
}
