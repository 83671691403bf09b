//! Command-line parsing

use stalk_chart::Locale;
use stalk_core::ObservationVector;

use crate::config::{OutputFormat, RunnerConfig};
use crate::error::{Result, RunnerError};

pub const USAGE: &str = r#"Stalk - price-window bounds from partial observations

USAGE:
    stalk [OPTIONS]

OPTIONS:
    --base, -b <PRICE>        Base (buy) price; omit or "?" when unknown
    --prices, -p <LIST>       Up to 12 comma separated slot prices, "-" or "?" for unknown
    --format, -f <FORMAT>     table (default) or json
    --locale, -l <TAG>        Label language: en, es, de, fr, nl, it, ko, zh-CN, zh-TW,
                              zh-HK, ja, pt-BR, ru
    --catalog <PATH>          Load the pattern catalog from a JSON file
    --config, -c <PATH>       Load runner configuration from a JSON file
    --sample                  Also print one illustrative path
    --seed <N>                Seed for the illustrative path
    --watch, -w               Read "<base> <prices>" lines from stdin, debounced
    --debounce-ms <MS>        Quiet period for --watch (default: 500)
    --help, -h                Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                  Log level filter

EXAMPLES:
    # Monday prices known, buy price 100
    stalk --base 100 --prices 88,84

    # Chart series as JSON, Spanish labels
    stalk -b 100 -p 88,84,80 -f json -l es

    # Recompute as lines arrive on stdin
    stalk --watch
"#;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Forecast {
        config: RunnerConfig,
        observations: ObservationVector,
    },
    Watch {
        config: RunnerConfig,
    },
}

#[derive(Debug, Default)]
struct Flags {
    config_path: Option<String>,
    base: Option<String>,
    prices: Option<String>,
    format: Option<String>,
    locale: Option<String>,
    catalog: Option<String>,
    sample: bool,
    seed: Option<String>,
    watch: bool,
    debounce_ms: Option<String>,
}

/// Parse arguments (without the program name)
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut flags = Flags::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value =
            |name: &str| args.next().ok_or_else(|| RunnerError::MissingValue(name.to_string()));

        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--config" | "-c" => flags.config_path = Some(value("--config")?),
            "--base" | "-b" => flags.base = Some(value("--base")?),
            "--prices" | "-p" => flags.prices = Some(value("--prices")?),
            "--format" | "-f" => flags.format = Some(value("--format")?),
            "--locale" | "-l" => flags.locale = Some(value("--locale")?),
            "--catalog" => flags.catalog = Some(value("--catalog")?),
            "--seed" => flags.seed = Some(value("--seed")?),
            "--debounce-ms" => flags.debounce_ms = Some(value("--debounce-ms")?),
            "--sample" => flags.sample = true,
            "--watch" | "-w" => flags.watch = true,
            other => {
                return Err(RunnerError::InvalidArgument(format!(
                    "unknown argument '{}'",
                    other
                )));
            }
        }
    }

    let config = build_config(&flags)?;

    if flags.watch {
        return Ok(Command::Watch { config });
    }

    let observations = ObservationVector::parse(
        flags.base.as_deref().unwrap_or_default(),
        flags.prices.as_deref().unwrap_or_default(),
    )?;

    Ok(Command::Forecast {
        config,
        observations,
    })
}

/// Config file first, then flag overrides
fn build_config(flags: &Flags) -> Result<RunnerConfig> {
    let mut config = match &flags.config_path {
        Some(path) => RunnerConfig::from_file(path)?,
        None => RunnerConfig::default(),
    };

    if let Some(format) = &flags.format {
        config.format = OutputFormat::parse(format)?;
    }
    if let Some(locale) = &flags.locale {
        config.locale = Locale::from_tag(locale);
    }
    if let Some(catalog) = &flags.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    if flags.sample {
        config.sample = true;
    }
    if let Some(seed) = &flags.seed {
        config.seed = Some(parse_number("--seed", seed)?);
    }
    if let Some(debounce) = &flags.debounce_ms {
        config.debounce_ms = parse_number("--debounce-ms", debounce)?;
    }

    Ok(config)
}

fn parse_number(flag: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| {
            RunnerError::InvalidArgument(format!("{} expects a number, got '{}'", flag, value))
        })
}

/// Parse one watch-mode line: `<base> <prices>`, either part may be omitted
pub fn parse_watch_line(line: &str) -> Result<ObservationVector> {
    let mut parts = line.split_whitespace();
    let first = parts.next().unwrap_or_default();
    let second = parts.next();

    if parts.next().is_some() {
        return Err(RunnerError::InvalidArgument(format!(
            "expected '<base> <prices>', got '{}'",
            line.trim()
        )));
    }

    let observations = match second {
        Some(prices) => ObservationVector::parse(first, prices)?,
        // A lone token with commas is a price list with an unknown base
        None if first.contains(',') => ObservationVector::parse("", first)?,
        None => ObservationVector::parse(first, "")?,
    };
    Ok(observations)
}
