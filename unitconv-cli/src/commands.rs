//! Command execution
//!
//! Results go to `out`; logs go to stderr through tracing.

use std::io::{BufRead, Write};
use tracing::{debug, info};
use unitconv_core::Family;
use unitconv_units::{catalog, family_info, tips, Conversion, FamilyInfo};
use crate::cli::{Command, FamilyArgs, OutputArgs};
use crate::config::Config;
use crate::error::CliError;
use crate::repl;

/// Run one command
pub fn run<R: BufRead, W: Write>(
    command: Command,
    config: &Config,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        Command::Convert { family, value, from, to, output } => {
            let family: Family = family.parse()?;
            let value = parse_value(&value)?;
            convert_and_print(family, value, &from, &to, config, &output, out)
        }
        Command::Length(args) => run_family(Family::Length, args, config, out),
        Command::Weight(args) => run_family(Family::Weight, args, config, out),
        Command::Temperature(args) => run_family(Family::Temperature, args, config, out),
        Command::Volume(args) => run_family(Family::Volume, args, config, out),
        Command::Units { family, json } => list_units(family.as_deref(), json || config.json, out),
        Command::Tips => {
            for tip in tips() {
                writeln!(out, "- {}", tip)?;
            }
            Ok(())
        }
        Command::Repl(output) => repl::run_repl(input, out, config, &output),
    }
}

/// Run one command and flush `out`, so a failed write is reported like any other error
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    config: &Config,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let result = run(command, config, input, out);
    let flushed = out.flush();
    result?;
    flushed?;
    Ok(())
}

/// Parse a numeric input; non-finite spellings ("NaN", "inf") are accepted
pub fn parse_value(raw: &str) -> Result<f64, CliError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidValue(raw.to_string()))
}

/// Format a conversion as text or JSON
pub fn render(conversion: &Conversion, config: &Config, output: &OutputArgs) -> Result<String, CliError> {
    if output.json || config.json {
        return Ok(serde_json::to_string(conversion)?);
    }
    let decimals = output
        .decimals
        .map(usize::from)
        .unwrap_or_else(|| config.decimals_for(conversion.family));
    Ok(conversion.render(decimals))
}

fn run_family<W: Write>(family: Family, args: FamilyArgs, config: &Config, out: &mut W) -> Result<(), CliError> {
    let defaults = family_info(family);
    let value = match args.value {
        Some(raw) => parse_value(&raw)?,
        None => defaults.default_value,
    };
    let from = args.from.as_deref().unwrap_or(defaults.default_from);
    let to = args.to.as_deref().unwrap_or(defaults.default_to);
    convert_and_print(family, value, from, to, config, &args.output, out)
}

fn convert_and_print<W: Write>(
    family: Family,
    value: f64,
    from: &str,
    to: &str,
    config: &Config,
    output: &OutputArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let conversion = Conversion::compute(family, value, from, to)?;
    info!(%family, from, to, result = conversion.result, "conversion complete");
    writeln!(out, "{}", render(&conversion, config, output)?)?;
    Ok(())
}

fn list_units<W: Write>(family: Option<&str>, json: bool, out: &mut W) -> Result<(), CliError> {
    let infos: Vec<FamilyInfo> = match family {
        Some(name) => vec![family_info(name.parse()?)],
        None => catalog(),
    };
    debug!(families = infos.len(), json, "listing units");

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&infos)?)?;
        return Ok(());
    }

    for info in &infos {
        writeln!(out, "{} ({}, via {})", info.header, info.family, info.family.pivot_unit())?;
        for unit in &info.units {
            writeln!(out, "  {}", unit)?;
        }
    }
    Ok(())
}
