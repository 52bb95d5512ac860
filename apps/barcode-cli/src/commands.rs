//! # Subcommand Handlers
//!
//! Each handler calls into gochi-core and renders the result as text or
//! JSON. Handlers return strings so they can be tested without a terminal;
//! `run` in lib.rs does the writing.

use std::io::{self, BufRead};

use gochi_core::barcode;
use gochi_core::samples::sample_barcodes;
use gochi_core::BarcodeInfo;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Outcome of checking one code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    #[serde(flatten)]
    pub info: BarcodeInfo,

    /// Why the code was rejected, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// =============================================================================
// check
// =============================================================================

/// Validates one code, logging rejections.
pub fn check_code(raw: &str) -> CheckResult {
    let info = barcode::describe(raw);
    let reason = barcode::validate(raw).err().map(|e| e.to_string());

    match &reason {
        Some(reason) => warn!(code = %info.code, %reason, "barcode rejected"),
        None => debug!(code = %info.code, symbology = %info.symbology, "barcode accepted"),
    }

    CheckResult { info, reason }
}

/// Validates every code and logs a summary.
pub fn check_codes<S: AsRef<str>>(codes: &[S]) -> Vec<CheckResult> {
    let results: Vec<CheckResult> = codes.iter().map(|c| check_code(c.as_ref())).collect();

    let valid = results.iter().filter(|r| r.info.valid).count();
    info!(
        checked = results.len(),
        valid,
        invalid = results.len() - valid,
        "check complete"
    );

    results
}

/// Reads one code per line, skipping blank lines.
pub fn read_codes<R: BufRead>(input: R) -> io::Result<Vec<String>> {
    let mut codes = Vec::new();
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            codes.push(line);
        }
    }
    Ok(codes)
}

pub fn render_check(results: &[CheckResult], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Text => Ok(results
            .iter()
            .map(|r| {
                let status = match &r.reason {
                    None => "valid".to_string(),
                    Some(reason) => format!("invalid: {}", reason),
                };
                format!("{:<16}  {:<7}  {}", r.info.formatted, r.info.symbology, status)
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

// =============================================================================
// format / detect / check-digit
// =============================================================================

pub fn render_format(code: &str, format: OutputFormat) -> CliResult<String> {
    let formatted = barcode::format(code);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "code": barcode::normalize(code),
            "formatted": formatted,
        }))?),
        OutputFormat::Text => Ok(formatted),
    }
}

pub fn render_detect(code: &str, format: OutputFormat) -> CliResult<String> {
    let symbology = barcode::detect_type(code);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "code": barcode::normalize(code),
            "symbology": symbology,
        }))?),
        OutputFormat::Text => Ok(symbology.to_string()),
    }
}

/// Completes a body with its check digit; a bad body is an error.
pub fn render_check_digit(body: &str, format: OutputFormat) -> CliResult<String> {
    let code = barcode::calculate_check_digit(body)?;
    debug!(%code, "check digit calculated");

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "code": code,
            "formatted": barcode::format(&code),
            "symbology": barcode::detect_type(&code),
        }))?),
        OutputFormat::Text => Ok(code),
    }
}

// =============================================================================
// samples
// =============================================================================

pub fn render_samples(format: OutputFormat) -> CliResult<String> {
    let samples = sample_barcodes();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&samples)?),
        OutputFormat::Text => Ok(samples
            .iter()
            .map(|s| format!("{:<13}  {:<7}  {}", s.code, s.symbology, s.name))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gochi_core::{BarcodeError, Symbology};
    use std::io::Cursor;

    use crate::error::CliError;

    #[test]
    fn test_check_code() {
        let result = check_code("4006381333931");
        assert!(result.info.valid);
        assert_eq!(result.reason, None);

        let result = check_code("4006381333930");
        assert!(!result.info.valid);
        assert_eq!(
            result.reason.as_deref(),
            Some("check digit mismatch: expected 1, found 0")
        );
    }

    #[test]
    fn test_read_codes_skips_blank_lines() {
        let input = Cursor::new("4006381333931\n\n   \n036000291452\n");
        let codes = read_codes(input).unwrap();
        assert_eq!(codes, vec!["4006381333931", "036000291452"]);
    }

    #[test]
    fn test_render_check_text() {
        let results = check_codes(&["4006381333931", "99"]);
        let text = render_check(&results, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("400 6381 33393 1"));
        assert!(lines[0].ends_with("valid"));
        assert!(lines[1].contains("Unknown"));
        assert!(lines[1].contains("invalid: invalid length 2"));
    }

    #[test]
    fn test_render_check_json() {
        let results = check_codes(&["036000291452", "12a"]);
        let json: serde_json::Value =
            serde_json::from_str(&render_check(&results, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json[0]["code"], "036000291452");
        assert_eq!(json[0]["symbology"], "UPC-A");
        assert_eq!(json[0]["valid"], true);
        assert!(json[0].get("reason").is_none());

        assert_eq!(json[1]["valid"], false);
        assert_eq!(json[1]["reason"], "invalid character 'a' at position 2");
    }

    #[test]
    fn test_render_format_and_detect() {
        assert_eq!(
            render_format("7501234567890", OutputFormat::Text).unwrap(),
            "750 1234 56789 0"
        );
        assert_eq!(
            render_detect("012345678905", OutputFormat::Text).unwrap(),
            "UPC-A"
        );

        let json: serde_json::Value =
            serde_json::from_str(&render_detect("9-9", OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["code"], "99");
        assert_eq!(json["symbology"], "Unknown");
    }

    #[test]
    fn test_render_check_digit() {
        assert_eq!(
            render_check_digit("03600029145", OutputFormat::Text).unwrap(),
            "036000291452"
        );

        let json: serde_json::Value = serde_json::from_str(
            &render_check_digit("400638133393", OutputFormat::Json).unwrap(),
        )
        .unwrap();
        assert_eq!(json["code"], "4006381333931");
        assert_eq!(json["symbology"], serde_json::to_value(Symbology::Ean13).unwrap());

        let err = render_check_digit("123", OutputFormat::Text).unwrap_err();
        assert!(matches!(
            err,
            CliError::Barcode(BarcodeError::InvalidBodyLength { length: 3 })
        ));
    }

    #[test]
    fn test_render_samples() {
        let text = render_samples(OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().next().unwrap().starts_with("7501234567893"));
        assert!(text.contains("Aspiradora Portátil"));
    }
}
