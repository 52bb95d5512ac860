//! # Sample Barcodes
//!
//! Development barcodes pre-assigned to the example inventory, used for
//! printing test labels and exercising the scanner end to end.
//!
//! Codes are built from fixed bodies with the codec's own check digit, so
//! every sample passes `is_valid`.

use crate::barcode::check_digit;
use crate::types::{SampleBarcode, Symbology};

/// (body without check digit, catalog item)
const SAMPLE_BODIES: &[(&str, &str)] = &[
    ("750123456789", "Cera Premium"),
    ("750123456790", "Shampoo Automotriz"),
    ("750123456791", "Microfibra Premium"),
    ("750123456792", "Pulidor de Llantas"),
    ("750123456793", "Aromatizante"),
    ("01234567890", "Limpiador de Vidrios"),
    ("01234567891", "Cepillo de Lavado"),
    ("01234567892", "Aspiradora Portátil"),
];

/// Returns the development barcodes, EAN-13 first, then UPC-A.
///
/// ## Example
/// ```rust
/// use gochi_core::barcode::is_valid;
/// use gochi_core::samples::sample_barcodes;
///
/// let samples = sample_barcodes();
/// assert_eq!(samples[0].code, "7501234567893");
/// assert!(samples.iter().all(|s| is_valid(&s.code)));
/// ```
pub fn sample_barcodes() -> Vec<SampleBarcode> {
    SAMPLE_BODIES
        .iter()
        .map(|&(body, name)| {
            let digits: Vec<u8> = body.bytes().map(|b| b - b'0').collect();
            let mut code = body.to_string();
            code.push(char::from(b'0' + check_digit(&digits)));

            SampleBarcode {
                symbology: Symbology::from_length(code.len()),
                code,
                name: name.to_string(),
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::{calculate_check_digit, detect_type, is_valid};

    #[test]
    fn test_sample_codes() {
        let codes: Vec<String> = sample_barcodes().into_iter().map(|s| s.code).collect();
        assert_eq!(
            codes,
            vec![
                "7501234567893",
                "7501234567909",
                "7501234567916",
                "7501234567923",
                "7501234567930",
                "012345678905",
                "012345678912",
                "012345678929",
            ]
        );
    }

    #[test]
    fn test_samples_are_valid_and_typed() {
        for sample in sample_barcodes() {
            assert!(is_valid(&sample.code), "{} should validate", sample.code);
            assert_eq!(detect_type(&sample.code), sample.symbology);
            assert!(!sample.name.is_empty());
        }
    }

    #[test]
    fn test_samples_match_calculate_check_digit() {
        for (body, _) in SAMPLE_BODIES {
            let expected = calculate_check_digit(body).unwrap();
            assert!(sample_barcodes().iter().any(|s| s.code == expected));
        }
    }

    #[test]
    fn test_sample_families() {
        let samples = sample_barcodes();
        let ean = samples.iter().filter(|s| s.symbology == Symbology::Ean13).count();
        let upc = samples.iter().filter(|s| s.symbology == Symbology::UpcA).count();
        assert_eq!((ean, upc), (5, 3));
    }
}
