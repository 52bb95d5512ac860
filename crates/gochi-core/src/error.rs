//! # Error Types
//!
//! Domain-specific error types for gochi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gochi-core errors (this file)                                         │
//! │  ├── BarcodeError     - Why a code was rejected by the codec           │
//! │  ├── ValidationError  - Input field validation failures                │
//! │  └── CoreError        - Wraps both for scan intake                     │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the shell user sees (exit codes)          │
//! │                                                                         │
//! │  Flow: BarcodeError → ValidationError/CoreError → CliError             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (length, position, digits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Barcode Error
// =============================================================================

/// Reasons a barcode value is rejected by the codec.
///
/// `is_valid` collapses all of these into `false`; `validate` and
/// `DigitString::parse` report the specific variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// Nothing left after stripping spaces and hyphens.
    #[error("barcode is empty")]
    Empty,

    /// A non-digit character survived normalization.
    ///
    /// `position` is the 0-based character index in the normalized code.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Digit count is not one of 6, 7, 8, 12 or 13.
    #[error("invalid length {length}: expected 6, 7, 8, 12 or 13 digits")]
    InvalidLength { length: usize },

    /// Length is right but the declared check digit disagrees.
    ///
    /// ## When This Occurs
    /// ```text
    /// Scan "4006381333930"
    ///      │
    ///      ▼
    /// body 400638133393 → computed check 1
    ///      │
    ///      ▼
    /// ChecksumMismatch { expected: 1, found: 0 }
    /// ```
    #[error("check digit mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },

    /// `calculate_check_digit` needs an 11-digit (UPC-A) or 12-digit (EAN-13) body.
    #[error("invalid body length {length}: expected 11 (UPC-A) or 12 (EAN-13) digits")]
    InvalidBodyLength { length: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before a code reaches the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., non-digit barcode, bad check digit).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by scan intake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The scanned or typed code was rejected by the codec.
    #[error("Invalid barcode: {0}")]
    Barcode(#[from] BarcodeError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_error_messages() {
        let err = BarcodeError::ChecksumMismatch {
            expected: 1,
            found: 0,
        };
        assert_eq!(err.to_string(), "check digit mismatch: expected 1, found 0");

        let err = BarcodeError::InvalidCharacter {
            character: 'x',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid character 'x' at position 3");

        let err = BarcodeError::InvalidLength { length: 9 };
        assert_eq!(
            err.to_string(),
            "invalid length 9: expected 6, 7, 8, 12 or 13 digits"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "barcode".to_string(),
        };
        assert_eq!(err.to_string(), "barcode is required");

        let err = ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "barcode is empty".to_string(),
        };
        assert_eq!(err.to_string(), "barcode has invalid format: barcode is empty");
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core_err: CoreError = BarcodeError::Empty.into();
        assert!(matches!(core_err, CoreError::Barcode(BarcodeError::Empty)));

        let validation_err = ValidationError::Required {
            field: "barcode".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
