//! # gochi-core: Pure Barcode Logic for Autolavado Gochi
//!
//! This crate validates, normalizes, formats, classifies and completes retail
//! barcodes (EAN-13, UPC-A, EAN-8, UPC-E) for the car wash inventory and POS.
//! Everything here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Autolavado Gochi Barcode Flow                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Scanner UI / Product forms / gochi-barcode CLI          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gochi-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  barcode  │  │   scan    │  │validation │  │  samples  │  │   │
//! │  │   │  codec    │  │  intake   │  │  fields   │  │ dev codes │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │         Product catalog (external): stores normalized code      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`barcode`] - The codec: normalize, validate, format, detect, check digits
//! - [`types`] - Value types shared with the UI (Symbology, BarcodeInfo, ...)
//! - [`error`] - Domain error types
//! - [`validation`] - Form field validation
//! - [`scan`] - Scanner intake and user-facing messages
//! - [`samples`] - Development barcodes for the example inventory
//!
//! ## Example Usage
//!
//! ```rust
//! use gochi_core::barcode::{detect_type, format, is_valid};
//! use gochi_core::Symbology;
//!
//! let raw = " 400-6381-33393-1 ";
//! assert!(is_valid(raw));
//! assert_eq!(format(raw), "400 6381 33393 1");
//! assert_eq!(detect_type(raw), Symbology::Ean13);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod barcode;
pub mod error;
pub mod samples;
pub mod scan;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use barcode::DigitString;
pub use error::{BarcodeError, CoreError, CoreResult, ValidationError};
pub use types::*;
