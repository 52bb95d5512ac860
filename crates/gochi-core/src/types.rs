//! # Domain Types
//!
//! Value types shared between the codec, scan intake and the scanning UI.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Symbology     │   │   BarcodeInfo   │   │  SampleBarcode  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  EAN-13  (13)   │   │  code           │   │  code           │       │
//! │  │  UPC-A   (12)   │   │  formatted      │   │  name           │       │
//! │  │  EAN-8   (8)    │   │  symbology      │   │  symbology      │       │
//! │  │  UPC-E   (6-7)  │   │  valid          │   └─────────────────┘       │
//! │  │  Unknown        │   └─────────────────┘                              │
//! │  └─────────────────┘   ┌─────────────────┐                              │
//! │                        │   ScanSource    │                              │
//! │                        │  Camera/Manual  │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are exported to TypeScript with ts-rs so the scanning UI
//! and this crate agree on the wire shape.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Symbology
// =============================================================================

/// Retail barcode family, identified by digit count alone.
///
/// Serializes to its display label (`"EAN-13"`, `"UPC-A"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Symbology {
    /// 13 digits, last one is a check digit.
    #[serde(rename = "EAN-13")]
    Ean13,
    /// 12 digits, last one is a check digit.
    #[serde(rename = "UPC-A")]
    UpcA,
    /// 8 digits. Check digit is not verified.
    #[serde(rename = "EAN-8")]
    Ean8,
    /// Compressed UPC, 6 or 7 digits. Check digit is not verified.
    #[serde(rename = "UPC-E")]
    UpcE,
    /// Any other length.
    Unknown,
}

impl Symbology {
    /// Maps a digit count to its symbology.
    ///
    /// ## Example
    /// ```rust
    /// use gochi_core::types::Symbology;
    ///
    /// assert_eq!(Symbology::from_length(13), Symbology::Ean13);
    /// assert_eq!(Symbology::from_length(7), Symbology::UpcE);
    /// assert_eq!(Symbology::from_length(2), Symbology::Unknown);
    /// ```
    pub const fn from_length(length: usize) -> Self {
        match length {
            13 => Symbology::Ean13,
            12 => Symbology::UpcA,
            8 => Symbology::Ean8,
            6 | 7 => Symbology::UpcE,
            _ => Symbology::Unknown,
        }
    }

    /// Display label, identical to the serialized form.
    pub const fn label(&self) -> &'static str {
        match self {
            Symbology::Ean13 => "EAN-13",
            Symbology::UpcA => "UPC-A",
            Symbology::Ean8 => "EAN-8",
            Symbology::UpcE => "UPC-E",
            Symbology::Unknown => "Unknown",
        }
    }

    /// Whether the codec verifies a trailing check digit for this family.
    #[inline]
    pub const fn has_check_digit(&self) -> bool {
        matches!(self, Symbology::Ean13 | Symbology::UpcA)
    }

    /// Whether this is one of the accepted families.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Symbology::Unknown)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// =============================================================================
// Barcode Info
// =============================================================================

/// Everything the UI shows about a single input code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BarcodeInfo {
    /// Normalized code (spaces and hyphens removed).
    pub code: String,

    /// Grouped form for display, e.g. `"400 6381 33393 1"`.
    pub formatted: String,

    /// Family detected from the length.
    pub symbology: Symbology,

    /// Result of `is_valid`.
    pub valid: bool,
}

// =============================================================================
// Scan Source
// =============================================================================

/// Where a scanned code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    /// Decoded from the camera feed.
    Camera,
    /// Typed into the manual entry field.
    Manual,
}

impl Default for ScanSource {
    fn default() -> Self {
        ScanSource::Manual
    }
}

// =============================================================================
// Sample Barcode
// =============================================================================

/// A development barcode pre-assigned to a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SampleBarcode {
    /// Full code including its check digit.
    pub code: String,

    /// Catalog item name.
    pub name: String,

    pub symbology: Symbology,
}

// =============================================================================
// Unit Tests
// =============================================================================
