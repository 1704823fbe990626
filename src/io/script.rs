use std::io::{self, BufRead};

use serde::Serialize;

use crate::application::TillService;
use crate::domain::{Holding, format_value};

/// Marker every command line starts with.
pub const PROMPT: &str = ">";

/// Run-aborting messages; the first failing line makes one of these the
/// session's entire output.
pub const INVALID_OPERATION: &str = "INVALID OPERATION";
pub const INVALID_OPERATION_INPUT: &str = "INVALID OPERATION INPUT";
pub const AMOUNT_NOT_SUPPORTED: &str = "AMOUNT NOT SUPPORTED";

/// Reply when no coin combination pays the banknote. Not an abort: the
/// session keeps running.
pub const CANNOT_EXCHANGE: &str = "< CANNOT EXCHANGE";

/// Everything a finished session produced: the transcript plus the final
/// ledger state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub transcript: Vec<String>,
    pub available_coins: Vec<Holding>,
    pub exchanged_banknotes: Vec<Holding>,
}

/// Executes a command script against a till, one line at a time.
///
/// Grammar: `> OPERATION ARG...` with whitespace-separated tokens; blank
/// lines are skipped. Each successful command contributes the echoed line,
/// the operation's reply (`<` lines, `EXCHANGE` only) and the `=` state
/// line to the transcript.
pub struct ScriptRunner {
    till: TillService,
    executed: usize,
}

impl ScriptRunner {
    pub fn new() -> Self {
        Self {
            till: TillService::new(),
            executed: 0,
        }
    }

    pub fn till(&self) -> &TillService {
        &self.till
    }

    /// Number of commands executed so far.
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Consume the whole input stream and return the finished report.
    ///
    /// `Err` is reserved for I/O failures. In-band validation failures
    /// abort the run the way the machine's operator panel does: the
    /// transcript collapses to the single abort message.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<SessionReport> {
        let mut transcript = Vec::new();
        for line in input.lines() {
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            match self.execute(&tokens) {
                Ok(reply) => {
                    transcript.push(line.trim().to_string());
                    transcript.extend(reply);
                    transcript.push(self.state_line());
                    self.executed += 1;
                }
                Err(message) => {
                    transcript = vec![message.to_string()];
                    break;
                }
            }
        }
        Ok(SessionReport {
            transcript,
            available_coins: self.till.available_coins(),
            exchanged_banknotes: self.till.exchanged_banknotes(),
        })
    }

    /// Validate and dispatch one tokenized command line. Returns the reply
    /// lines; an `Err` carries the message that aborts the run.
    fn execute(&mut self, tokens: &[&str]) -> Result<Vec<String>, &'static str> {
        let Some((&prompt, rest)) = tokens.split_first() else {
            return Err(INVALID_OPERATION);
        };
        if prompt != PROMPT {
            return Err(INVALID_OPERATION);
        }
        let Some((&operation, args)) = rest.split_first() else {
            return Err(INVALID_OPERATION);
        };
        if !TillService::is_supported(operation) {
            return Err(INVALID_OPERATION);
        }
        let Some(required) = TillService::required_args(operation) else {
            return Err(INVALID_OPERATION);
        };
        if args.len() != required {
            return Err(INVALID_OPERATION_INPUT);
        }

        match operation {
            "LOAD" => {
                self.till
                    .load(args[0], args[1])
                    .map_err(|_| AMOUNT_NOT_SUPPORTED)?;
                Ok(Vec::new())
            }
            "EXCHANGE" => {
                let result = self
                    .till
                    .exchange(args[0])
                    .map_err(|_| AMOUNT_NOT_SUPPORTED)?;
                Ok(vec![match result {
                    Some(breakdown) => format!("< {}", format_holdings(&breakdown)),
                    None => CANNOT_EXCHANGE.to_string(),
                }])
            }
            _ => unreachable!("only supported operations reach dispatch"),
        }
    }

    /// The `=` line: coins in first-load order, then exchanged banknotes
    /// ascending.
    fn state_line(&self) -> String {
        let mut items = self.till.available_coins();
        items.extend(self.till.exchanged_banknotes());
        format!("= {}", format_holdings(&items))
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Render holdings as `count value£` items joined by commas, e.g.
/// `10 1£, 25 0.2£`.
fn format_holdings(holdings: &[Holding]) -> String {
    holdings
        .iter()
        .map(|h| format!("{} {}£", h.count, format_value(h.denomination)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_holdings() {
        let items = vec![Holding::new(100, 10), Holding::new(20, 25)];
        assert_eq!(format_holdings(&items), "10 1£, 25 0.2£");
        assert_eq!(format_holdings(&[]), "");
    }
}
