//! # Validation Module
//!
//! Field-level validation for barcodes entered on product forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Scanner / form input                                         │
//! │  ├── Raw camera or keyboard text                                       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required vs optional field handling                               │
//! │  └── Codec checks (digits, length, check digit)                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog (external)                                           │
//! │  └── Uniqueness and lookup of the normalized code                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gochi_core::validation::{validate_barcode, validate_optional_barcode};
//!
//! let code = validate_barcode("400 6381 33393 1").unwrap();
//! assert_eq!(code.as_str(), "4006381333931");
//!
//! assert_eq!(validate_optional_barcode(Some("  ")).unwrap(), None);
//! ```

use crate::barcode::{self, DigitString};
use crate::error::{BarcodeError, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const BARCODE_FIELD: &str = "barcode";

/// Validates a required barcode field.
///
/// ## Rules
/// - Must not be empty once spaces and hyphens are removed
/// - Must pass the codec (digits only, accepted length, check digit)
///
/// ## Returns
/// The normalized code.
pub fn validate_barcode(raw: &str) -> ValidationResult<DigitString> {
    barcode::validate(raw).map_err(|e| match e {
        BarcodeError::Empty => ValidationError::Required {
            field: BARCODE_FIELD.to_string(),
        },
        other => ValidationError::InvalidFormat {
            field: BARCODE_FIELD.to_string(),
            reason: other.to_string(),
        },
    })?;

    DigitString::parse(raw).map_err(|e| ValidationError::InvalidFormat {
        field: BARCODE_FIELD.to_string(),
        reason: e.to_string(),
    })
}

/// Validates an optional barcode field.
///
/// `None` and blank input both mean "no barcode".
pub fn validate_optional_barcode(raw: Option<&str>) -> ValidationResult<Option<DigitString>> {
    match raw {
        Some(raw) if !barcode::normalize(raw).is_empty() => validate_barcode(raw).map(Some),
        _ => Ok(None),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
