//! `htoprc` CLI: parse, normalize, score and check htoprc files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse to JSON (stdin → stdout)
//! htoprc parse < ~/.config/htop/htoprc
//!
//! # Rewrite a file keeping only settings that differ from stock htop
//! htoprc format --only-non-defaults -i htoprc -o htoprc.min
//!
//! # Customization score, with the rules that fired
//! htoprc score --explain -i htoprc
//!
//! # List warnings (unknown options, with line numbers)
//! htoprc check -i htoprc
//! ```
//!
//! Set `LOG_LEVEL=debug` to see per-line diagnostics on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use htoprc_core::{FormatVersion, ParseResult, SerializeOptions, WarningKind};
use std::io::{self, Read, Write};
use tracing::{debug, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "htoprc",
    version,
    about = "Parse, normalize and score htop configuration files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an htoprc file and print the result as JSON
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print compact JSON instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },
    /// Re-serialize an htoprc file in canonical order
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Only write settings that differ from htop's defaults
        #[arg(long)]
        only_non_defaults: bool,
        /// Leave out htop_version and config_reader_min_version
        #[arg(long)]
        no_version: bool,
        /// Drop options this tool does not recognize
        #[arg(long)]
        no_unknown: bool,
    },
    /// Print the customization score
    Score {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// List the rules that contributed to the score
        #[arg(long)]
        explain: bool,
    },
    /// List parse warnings
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            compact,
        } => {
            let result = parse_input(input.as_deref())?;
            let json = if compact {
                serde_json::to_string(&result)
            } else {
                serde_json::to_string_pretty(&result)
            }
            .context("Failed to encode parse result as JSON")?;
            write_output(output.as_deref(), &format!("{json}\n"))?;
        }
        Commands::Format {
            input,
            output,
            only_non_defaults,
            no_version,
            no_unknown,
        } => {
            let result = parse_input(input.as_deref())?;
            let options = SerializeOptions {
                include_version: !no_version,
                only_non_defaults,
                include_unknown: !no_unknown,
            };
            debug!(?options, "formatting htoprc");
            let formatted = htoprc_core::serialize(&result.config, &options);
            write_output(output.as_deref(), &formatted)?;
        }
        Commands::Score { input, explain } => {
            let result = parse_input(input.as_deref())?;
            println!("{}", result.score);
            if explain {
                for rule in htoprc_core::score_breakdown(&result.config) {
                    println!("  +{:<3} {}", rule.points(), rule.description());
                }
            }
        }
        Commands::Check { input } => {
            let result = parse_input(input.as_deref())?;
            if result.warnings.is_empty() {
                println!("No warnings ({} format)", format_version_label(result.version));
            }
            for warning in &result.warnings {
                println!(
                    "line {}: [{}] {}",
                    warning.line,
                    warning_label(warning.kind),
                    warning.message
                );
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber. Level comes from `LOG_LEVEL`, default `warn`.
fn init_logging() -> Result<()> {
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "info" => TraceLevel::INFO,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")
}

fn warning_label(kind: WarningKind) -> &'static str {
    match kind {
        WarningKind::UnknownOption => "unknown option",
        WarningKind::InvalidValue => "invalid value",
        WarningKind::Deprecated => "deprecated",
    }
}

fn format_version_label(version: FormatVersion) -> &'static str {
    match version {
        FormatVersion::V2 => "v2",
        FormatVersion::V3 => "v3",
        FormatVersion::Unknown => "unknown",
    }
}

/// Read the input (file or stdin) and parse it. Parsing itself cannot fail.
fn parse_input(path: Option<&str>) -> Result<ParseResult> {
    let text = read_input(path)?;
    let result = htoprc_core::parse(&text);
    debug!(
        source = path.unwrap_or("<stdin>"),
        bytes = text.len(),
        warnings = result.warnings.len(),
        "input parsed"
    );
    Ok(result)
}

fn read_input(path: Option<&str>) -> Result<String> {
    let Some(path) = path else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    };
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
        }
        None => io::stdout()
            .lock()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout"),
    }
}
