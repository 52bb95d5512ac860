//! # Scan Intake
//!
//! Turns raw scanner or keyboard input into an accepted barcode, or a
//! message the cashier can act on.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Camera decode / manual entry                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  process_scan(raw, source) ← THIS MODULE                               │
//! │       │                                                                 │
//! │       ├── blank?   → Validation(Required) → "Please enter a barcode."  │
//! │       │                                                                 │
//! │       ├── invalid? → Barcode(reason) → rejection_message(source)       │
//! │       │                                                                 │
//! │       └── OK → ScannedBarcode → catalog lookup (external)              │
//! │                  camera scans auto-submit after AUTO_SUBMIT_DELAY_MS   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::barcode::{self, DigitString};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{ScanSource, Symbology};

/// Delay between a valid camera scan and its automatic submission.
pub const AUTO_SUBMIT_DELAY_MS: u64 = 800;

/// A scan that passed the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedBarcode {
    /// Normalized code, as stored in the catalog.
    pub code: DigitString,

    pub symbology: Symbology,

    /// Grouped form for the confirmation banner.
    pub formatted: String,

    pub source: ScanSource,
}

impl ScannedBarcode {
    /// Confirmation line shown once a code is accepted.
    pub fn user_message(&self) -> String {
        format!("Valid code: {} ({})", self.formatted, self.symbology)
    }
}

/// Normalizes and validates one scan.
///
/// ## Example
/// ```rust
/// use gochi_core::scan::process_scan;
/// use gochi_core::{ScanSource, Symbology};
///
/// let scan = process_scan(" 0 36000 29145 2 ", ScanSource::Camera).unwrap();
/// assert_eq!(scan.code.as_str(), "036000291452");
/// assert_eq!(scan.symbology, Symbology::UpcA);
/// ```
pub fn process_scan(raw: &str, source: ScanSource) -> CoreResult<ScannedBarcode> {
    let normalized = barcode::normalize(raw);

    if normalized.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        }
        .into());
    }

    let symbology = barcode::validate(&normalized)?;
    let formatted = barcode::format(&normalized);
    let code = DigitString::parse(&normalized)?;

    Ok(ScannedBarcode {
        code,
        symbology,
        formatted,
        source,
    })
}

/// User-facing text for a rejected scan.
///
/// Camera rejections suggest retrying or switching to manual entry; manual
/// rejections point at the expected formats.
pub fn rejection_message(error: &CoreError, source: ScanSource) -> &'static str {
    match (error, source) {
        (CoreError::Validation(_), _) => "Please enter a barcode.",
        (CoreError::Barcode(_), ScanSource::Camera) => {
            "Invalid barcode. Try again or enter it manually."
        }
        (CoreError::Barcode(_), ScanSource::Manual) => {
            "Invalid barcode. Check the format (EAN-13, UPC-A, etc.)."
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BarcodeError;

    #[test]
    fn test_process_scan_accepts_valid_code() {
        let scan = process_scan("400-6381-33393-1", ScanSource::Manual).unwrap();
        assert_eq!(scan.code.as_str(), "4006381333931");
        assert_eq!(scan.symbology, Symbology::Ean13);
        assert_eq!(scan.formatted, "400 6381 33393 1");
        assert_eq!(scan.source, ScanSource::Manual);
        assert_eq!(scan.user_message(), "Valid code: 400 6381 33393 1 (EAN-13)");
    }

    #[test]
    fn test_process_scan_accepts_short_codes() {
        let scan = process_scan("1234567", ScanSource::Camera).unwrap();
        assert_eq!(scan.symbology, Symbology::UpcE);
        assert_eq!(scan.formatted, "1234567");
    }

    #[test]
    fn test_process_scan_blank_input() {
        let err = process_scan("  \n", ScanSource::Manual).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
        assert_eq!(
            rejection_message(&err, ScanSource::Manual),
            "Please enter a barcode."
        );
    }

    #[test]
    fn test_process_scan_rejects_bad_checksum() {
        let err = process_scan("4006381333930", ScanSource::Camera).unwrap_err();
        assert_eq!(
            err,
            CoreError::Barcode(BarcodeError::ChecksumMismatch {
                expected: 1,
                found: 0
            })
        );
        assert_eq!(
            rejection_message(&err, ScanSource::Camera),
            "Invalid barcode. Try again or enter it manually."
        );
        assert_eq!(
            rejection_message(&err, ScanSource::Manual),
            "Invalid barcode. Check the format (EAN-13, UPC-A, etc.)."
        );
    }

    #[test]
    fn test_process_scan_rejects_non_numeric_symbologies() {
        // Code 128 / Code 39 payloads decode fine on camera but are not retail codes
        let err = process_scan("CW-LAVADO-01", ScanSource::Camera).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Barcode(BarcodeError::InvalidCharacter { character: 'C', position: 0 })
        ));
    }

    #[test]
    fn test_scanned_barcode_serialization() {
        let scan = process_scan("036000291452", ScanSource::Camera).unwrap();
        let json = serde_json::to_value(&scan).unwrap();
        assert_eq!(json["code"], "036000291452");
        assert_eq!(json["symbology"], "UPC-A");
        assert_eq!(json["formatted"], "0 36000 29145 2");
        assert_eq!(json["source"], "camera");
    }
}
