use anyhow::Result;
use clap::Parser;
use till::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
