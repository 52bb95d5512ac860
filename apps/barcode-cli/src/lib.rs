//! # gochi-barcode
//!
//! Command-line front end for gochi-core, used from the shell and by label
//! printing scripts.
//!
//! ## Usage
//! ```bash
//! # Validate codes (exit status 1 if any is invalid)
//! gochi-barcode check 4006381333931 "0 36000 29145 2"
//!
//! # Validate one code per line from stdin, as JSON
//! cat codes.txt | gochi-barcode --json check
//!
//! # Complete a body with its check digit
//! gochi-barcode check-digit 75012345678
//!
//! # List development barcodes
//! gochi-barcode samples
//! ```
//!
//! ## Environment
//! - `GOCHI_OUTPUT` - `text` (default) or `json`
//! - `GOCHI_FAIL_ON_INVALID` - `true` (default) or `false`
//! - `GOCHI_LOG` / `RUST_LOG` - tracing filter, logs go to stderr

pub mod commands;
pub mod config;
pub mod error;

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{CliConfig, OutputFormat, DEFAULT_LOG_FILTER};
use error::{CliResult, EXIT_FAILURE};

/// Retail barcode toolkit for Autolavado Gochi.
#[derive(Debug, Parser)]
#[command(name = "gochi-barcode", version)]
#[command(about = "Validate, format and complete EAN-13 / UPC-A / EAN-8 / UPC-E barcodes")]
pub struct Cli {
    /// Print JSON instead of text (overrides GOCHI_OUTPUT)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate codes; reads one per line from stdin when none are given
    Check {
        codes: Vec<String>,
    },

    /// Group a code for display
    Format {
        code: String,
    },

    /// Detect the symbology from the code length
    Detect {
        code: String,
    },

    /// Append the check digit to an 11-digit (UPC-A) or 12-digit (EAN-13) body
    CheckDigit {
        body: String,
    },

    /// List the development barcodes of the example inventory
    Samples,
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout only carries results.
pub fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one command and returns the process exit status.
pub fn run<R, W>(cli: Cli, config: &CliConfig, input: R, out: &mut W) -> CliResult<i32>
where
    R: BufRead,
    W: Write,
{
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let mut status = 0;
    let rendered = match cli.command {
        Command::Check { codes } => {
            let codes = if codes.is_empty() {
                commands::read_codes(input)?
            } else {
                codes
            };

            let results = commands::check_codes(codes.as_slice());
            if config.fail_on_invalid && results.iter().any(|r| !r.info.valid) {
                status = EXIT_FAILURE;
            }
            commands::render_check(&results, format)?
        }
        Command::Format { code } => commands::render_format(&code, format)?,
        Command::Detect { code } => commands::render_detect(&code, format)?,
        Command::CheckDigit { body } => commands::render_check_digit(&body, format)?,
        Command::Samples => commands::render_samples(format)?,
    };

    if !rendered.is_empty() {
        writeln!(out, "{}", rendered)?;
    }
    out.flush()?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str], config: &CliConfig, stdin: &str) -> (CliResult<i32>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = run(cli, config, Cursor::new(stdin.to_string()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_check_all_valid() {
        let (status, out) = run_args(
            &["gochi-barcode", "check", "4006381333931", "0 36000 29145 2"],
            &CliConfig::default(),
            "",
        );
        assert_eq!(status.unwrap(), 0);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_check_invalid_sets_exit_status() {
        let (status, _) = run_args(
            &["gochi-barcode", "check", "4006381333930"],
            &CliConfig::default(),
            "",
        );
        assert_eq!(status.unwrap(), EXIT_FAILURE);

        let config = CliConfig {
            fail_on_invalid: false,
            ..CliConfig::default()
        };
        let (status, _) = run_args(&["gochi-barcode", "check", "4006381333930"], &config, "");
        assert_eq!(status.unwrap(), 0);
    }

    #[test]
    fn test_check_reads_stdin() {
        let (status, out) = run_args(
            &["gochi-barcode", "--json", "check"],
            &CliConfig::default(),
            "4006381333931\n\n1234567\n",
        );
        assert_eq!(status.unwrap(), 0);

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[1]["symbology"], "UPC-E");
    }

    #[test]
    fn test_check_with_empty_stdin_prints_nothing() {
        let (status, out) = run_args(&["gochi-barcode", "check"], &CliConfig::default(), "");
        assert_eq!(status.unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_output_format_from_config() {
        let config = CliConfig {
            output: OutputFormat::Json,
            ..CliConfig::default()
        };
        let (_, out) = run_args(&["gochi-barcode", "detect", "7501234567890"], &config, "");
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["symbology"], "EAN-13");
    }

    #[test]
    fn test_format_and_check_digit_commands() {
        let (_, out) = run_args(
            &["gochi-barcode", "format", "012345678905"],
            &CliConfig::default(),
            "",
        );
        assert_eq!(out, "0 12345 67890 5\n");

        let (_, out) = run_args(
            &["gochi-barcode", "check-digit", "400638133393"],
            &CliConfig::default(),
            "",
        );
        assert_eq!(out, "4006381333931\n");
    }

    #[test]
    fn test_check_digit_bad_body_is_usage_error() {
        let (result, out) = run_args(
            &["gochi-barcode", "check-digit", "12345"],
            &CliConfig::default(),
            "",
        );
        assert_eq!(result.unwrap_err().exit_code(), error::EXIT_USAGE);
        assert!(out.is_empty());
    }

    #[test]
    fn test_samples_command() {
        let (status, out) = run_args(&["gochi-barcode", "samples"], &CliConfig::default(), "");
        assert_eq!(status.unwrap(), 0);
        assert_eq!(out.lines().count(), 8);
    }
}
