//! Entrypoint.

use clap::Parser;
use config::{Command, Opts};
use converter::{Unit, convert, convert_all};
use dotenvy::dotenv;
use eyre::WrapErr;
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::filter::EnvFilter;

/// JSON shape of a single conversion.
#[derive(Debug, Serialize)]
struct ConversionOutput<'a> {
    value: &'a str,
    from: Unit,
    to: Unit,
    result: String,
}

/// JSON shape of a unit listing row.
#[derive(Debug, Serialize)]
struct UnitOutput {
    unit: Unit,
    wei: String,
}

fn main() -> eyre::Result<()> {
    if let Ok(custom_env_file) = std::env::var("ENV_FILE") {
        dotenvy::from_filename(custom_env_file)?;
    } else {
        // Try the default .env file, and ignore if it doesn't exist.
        dotenv().ok();
    }

    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&opts.output.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = run(&opts)?;
    println!("{output}");
    Ok(())
}

/// Execute the selected command and render its output.
fn run(opts: &Opts) -> eyre::Result<String> {
    let options = opts.converter_options();
    let json = opts.output.json;
    debug!(
        command = ?opts.command,
        decimal_places = options.decimal_places,
        json,
        "Running command"
    );

    match &opts.command {
        Command::Convert { value, from, to } => {
            let result = convert(value, *from, *to, options)
                .inspect_err(|err| {
                    warn!(%err, value = value.as_str(), %from, %to, "Conversion failed");
                })
                .wrap_err_with(|| format!("could not convert {value:?} from {from} to {to}"))?;
            if json {
                let out = ConversionOutput { value, from: *from, to: *to, result };
                Ok(serde_json::to_string_pretty(&out)?)
            } else {
                Ok(result)
            }
        }
        Command::Table { value, from } => {
            let rows = convert_all(value, *from, options)
                .inspect_err(|err| warn!(%err, value = value.as_str(), %from, "Conversion failed"))
                .wrap_err_with(|| format!("could not convert {value:?} from {from}"))?;
            if json {
                return Ok(serde_json::to_string_pretty(&rows)?);
            }
            Ok(rows
                .iter()
                .map(|row| format!("{} {}", row.amount, row.unit))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Units => {
            let units: Vec<_> = Unit::ALL
                .into_iter()
                .map(|unit| UnitOutput { unit, wei: unit.wei().to_string() })
                .collect();
            if json {
                return Ok(serde_json::to_string_pretty(&units)?);
            }
            Ok(units
                .iter()
                .map(|u| format!("{} {}", u.unit, u.wei))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> eyre::Result<String> {
        let opts = Opts::try_parse_from(std::iter::once("ethconv").chain(args.iter().copied()))?;
        run(&opts)
    }

    #[test]
    fn test_convert_plain() {
        let out = run_args(&["convert", "1", "--from", "ether", "--to", "gwei"]).unwrap();
        assert_eq!(out, "1000000000");
    }

    #[test]
    fn test_convert_respects_decimals() {
        let out = run_args(&["convert", "1234", "-f", "wei", "-t", "gwei", "--decimals", "2"])
            .unwrap();
        assert_eq!(out, "0");
        let out = run_args(&["convert", "12345678", "-f", "wei", "-t", "gwei", "--decimals", "2"])
            .unwrap();
        assert_eq!(out, "0.01");
    }

    #[test]
    fn test_convert_json() {
        let out =
            run_args(&["convert", "0.5", "-f", "ether", "-t", "finney", "--json"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["value"], "0.5");
        assert_eq!(parsed["from"], "Ether");
        assert_eq!(parsed["to"], "Finney");
        assert_eq!(parsed["result"], "500");
    }

    #[test]
    fn test_convert_failure_has_context() {
        let err = run_args(&["convert", "-1", "-f", "ether", "-t", "wei"]).unwrap_err();
        assert_eq!(err.to_string(), "could not convert \"-1\" from Ether to Wei");
        let chain: Vec<_> = err.chain().map(|e| e.to_string()).collect();
        assert!(chain.iter().any(|e| e.starts_with("conversion failed")));
    }

    #[test]
    fn test_table() {
        let out = run_args(&["table", "1", "-f", "gwei"]).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1000000000 Wei",
                "1 Gwei",
                "0.001 Szabo",
                "0.000001 Finney",
                "0.000000001 Ether"
            ]
        );
    }

    #[test]
    fn test_table_json() {
        let out = run_args(&["table", "1", "-f", "ether", "--json"]).unwrap();
        let parsed: Vec<converter::Denomination> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[0].amount, "1000000000000000000");
        assert_eq!(parsed[4].unit, Unit::Ether);
    }

    #[test]
    fn test_units() {
        let out = run_args(&["units"]).unwrap();
        assert_eq!(out.lines().next(), Some("Wei 1"));
        assert_eq!(out.lines().last(), Some("Ether 1000000000000000000"));
    }
}
