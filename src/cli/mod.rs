use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::domain::format_cents;
use crate::io::ScriptRunner;

/// Till - coin-exchange machine simulator
#[derive(Parser)]
#[command(name = "till")]
#[command(about = "Simulates a cash till that exchanges banknotes for coins")]
#[command(version)]
pub struct Cli {
    /// Command script file (lines like "> LOAD 10 1" or "> EXCHANGE 20")
    pub script: PathBuf,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let file = File::open(&self.script)
            .with_context(|| format!("Cannot open script file '{}'", self.script.display()))?;

        let mut runner = ScriptRunner::new();
        let report = runner
            .run(BufReader::new(file))
            .context("Failed to read script file")?;

        match self.format.as_str() {
            "text" => println!("{}", report.transcript.join("\n")),
            "json" => println!("{}", serde_json::to_string_pretty(&report)?),
            other => bail!("Unknown output format '{}'. Use 'text' or 'json'", other),
        }

        if self.verbose {
            eprintln!(
                "[till] {} command(s) executed, {}£ left in coins",
                runner.executed(),
                format_cents(runner.till().coin_value())
            );
        }

        Ok(())
    }
}
