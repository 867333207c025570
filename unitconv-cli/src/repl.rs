//! Line-oriented conversion loop
//!
//! Each input line is `<family> <value> <from> <to>`. One result or error is
//! written per line; a bad line never ends the loop. Blank lines are
//! skipped, and `quit`, `exit` or EOF stop it.

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use unitconv_core::Family;
use unitconv_units::Conversion;
use crate::cli::OutputArgs;
use crate::commands::{parse_value, render};
use crate::config::Config;
use crate::error::CliError;

/// Run the loop until EOF or `quit`
pub fn run_repl<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    config: &Config,
    output: &OutputArgs,
) -> Result<(), CliError> {
    info!("conversion loop ready");
    let mut answered = 0usize;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            debug!("quit requested");
            break;
        }

        let response = match parse_line(line).and_then(|(family, value, from, to)| {
            let conversion = Conversion::compute(family, value, from, to)?;
            render(&conversion, config, output)
        }) {
            Ok(text) => text,
            Err(e) => {
                warn!(code = e.code(), "{}", e);
                if output.json || config.json {
                    serde_json::to_string(&serde_json::json!({ "error": e.report() }))?
                } else {
                    format!("error: {}", e.report())
                }
            }
        };

        writeln!(out, "{}", response)?;
        out.flush()?;
        answered += 1;
    }

    info!(answered, "conversion loop finished");
    Ok(())
}

/// Split a request line into family, value and the two unit identifiers
fn parse_line(line: &str) -> Result<(Family, f64, &str, &str), CliError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [family, value, from, to] => Ok((family.parse()?, parse_value(value)?, *from, *to)),
        _ => Err(CliError::Malformed(line.to_string())),
    }
}
