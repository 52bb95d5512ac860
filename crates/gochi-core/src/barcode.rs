//! # Barcode Codec
//!
//! Validation, normalization, display formatting, family detection and
//! check digit generation for retail barcodes.
//!
//! ## Accepted Families
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Length   Symbology   Check digit          Display grouping             │
//! │  ──────   ─────────   ──────────────────   ───────────────────────────  │
//! │  13       EAN-13      verified             3-4-5-1  "400 6381 33393 1"  │
//! │  12       UPC-A       verified             1-5-5-1  "0 36000 29145 2"   │
//! │  8        EAN-8       length only          4-4      "9638 5074"         │
//! │  6-7      UPC-E       length only          none                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Check Digit
//! Body digits are weighted 3, 1, 3, 1... counting from the right-hand end of
//! the body, so EAN-13 and UPC-A share one routine (UPC-A is EAN-13 with a
//! leading zero dropped). The check digit brings the weighted sum up to the
//! next multiple of 10.
//!
//! ```text
//! body   4  0  0  6  3  8  1  3  3  3  9  3
//! weight 1  3  1  3  1  3  1  3  1  3  1  3
//! sum    4+0+0+18+3+24+1+9+3+9+9+9 = 89  →  check = (10 - 9) % 10 = 1
//! ```
//!
//! ## Usage
//! ```rust
//! use gochi_core::barcode::{calculate_check_digit, format, is_valid};
//!
//! assert!(is_valid("4006381333931"));
//! assert_eq!(format("4006381333931"), "400 6381 33393 1");
//! assert_eq!(calculate_check_digit("400638133393").unwrap(), "4006381333931");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BarcodeError;
use crate::types::{BarcodeInfo, Symbology};

/// Digit counts accepted by [`is_valid`].
pub const VALID_LENGTHS: [usize; 5] = [6, 7, 8, 12, 13];

/// Body length that completes to a UPC-A code.
pub const UPC_A_BODY_LENGTH: usize = 11;

/// Body length that completes to an EAN-13 code.
pub const EAN_13_BODY_LENGTH: usize = 12;

// =============================================================================
// Normalization
// =============================================================================

/// Strips whitespace and hyphens from a raw scanned or typed code.
///
/// Every other character is kept as-is, including letters and their case.
///
/// ## Example
/// ```rust
/// use gochi_core::barcode::normalize;
///
/// assert_eq!(normalize(" 400-6381 333931\n"), "4006381333931");
/// assert_eq!(normalize("ab-C"), "abC");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|&c| !is_separator(c)).collect()
}

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

// =============================================================================
// Digit String
// =============================================================================

/// A normalized, non-empty code made only of ASCII digits.
///
/// The only way to build one is [`DigitString::parse`], so checksum code
/// working on a `DigitString` never sees a non-digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitString(String);

impl DigitString {
    /// Normalizes `raw` and checks that only digits remain.
    ///
    /// Length is not checked here; see [`validate`] for the full gate.
    ///
    /// ## Example
    /// ```rust
    /// use gochi_core::barcode::DigitString;
    /// use gochi_core::BarcodeError;
    ///
    /// let code = DigitString::parse("0 36000 29145 2").unwrap();
    /// assert_eq!(code.as_str(), "036000291452");
    ///
    /// assert_eq!(DigitString::parse(" - "), Err(BarcodeError::Empty));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, BarcodeError> {
        let code = normalize(raw);

        if code.is_empty() {
            return Err(BarcodeError::Empty);
        }

        if let Some((position, character)) = code
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(BarcodeError::InvalidCharacter {
                character,
                position,
            });
        }

        Ok(DigitString(code))
    }

    /// Returns the digits as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a parsed code.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value (0-9) of each digit, left to right.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Family implied by the digit count.
    #[inline]
    pub fn symbology(&self) -> Symbology {
        Symbology::from_length(self.len())
    }

    /// Unwraps into the underlying `String`.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for DigitString {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DigitString::parse(s)
    }
}

impl TryFrom<String> for DigitString {
    type Error = BarcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DigitString::parse(&value)
    }
}

impl From<DigitString> for String {
    fn from(value: DigitString) -> Self {
        value.0
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Check Digit Arithmetic
// =============================================================================

/// Modulo-10 check digit for a body of digit values (0-9).
///
/// The rightmost body digit carries weight 3, then 1, 3, 1... leftwards.
pub(crate) fn check_digit(body: &[u8]) -> u8 {
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| u32::from(digit) * if i % 2 == 0 { 3 } else { 1 })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Compares the trailing digit of `code` against the computed one.
fn verify_check_digit(code: &DigitString) -> Result<(), BarcodeError> {
    let digits: Vec<u8> = code.digits().collect();

    // DigitString is never empty
    let Some((&found, body)) = digits.split_last() else {
        return Err(BarcodeError::Empty);
    };

    let expected = check_digit(body);
    if expected != found {
        return Err(BarcodeError::ChecksumMismatch { expected, found });
    }

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

/// Validates a code and reports its family, or why it was rejected.
///
/// ## Decision Flow
/// ```text
/// raw ──► normalize ──► empty? ──────────────► Empty
///                        │
///                        ▼
///                   non-digit? ──────────────► InvalidCharacter
///                        │
///                        ▼
///               length ∉ {6,7,8,12,13}? ─────► InvalidLength
///                        │
///                        ▼
///               length 12/13 and bad check? ─► ChecksumMismatch
///                        │
///                        ▼
///                   Ok(symbology)
/// ```
///
/// ## Example
/// ```rust
/// use gochi_core::barcode::validate;
/// use gochi_core::{BarcodeError, Symbology};
///
/// assert_eq!(validate("036000291452"), Ok(Symbology::UpcA));
/// assert_eq!(
///     validate("4006381333930"),
///     Err(BarcodeError::ChecksumMismatch { expected: 1, found: 0 })
/// );
/// ```
pub fn validate(code: &str) -> Result<Symbology, BarcodeError> {
    let code = DigitString::parse(code)?;
    let symbology = code.symbology();

    if !symbology.is_known() {
        return Err(BarcodeError::InvalidLength { length: code.len() });
    }

    if symbology.has_check_digit() {
        verify_check_digit(&code)?;
    }

    Ok(symbology)
}

/// Returns `true` if `code` is an acceptable retail barcode.
///
/// EAN-13 and UPC-A must carry a correct check digit. EAN-8 and UPC-E are
/// accepted on length alone.
///
/// ## Example
/// ```rust
/// use gochi_core::barcode::is_valid;
///
/// assert!(is_valid("4006381333931"));
/// assert!(is_valid("1234567"));
/// assert!(!is_valid(""));
/// assert!(!is_valid("abcdefghijkl"));
/// ```
pub fn is_valid(code: &str) -> bool {
    validate(code).is_ok()
}

/// Checks the trailing digit of a 12- or 13-digit code.
///
/// Any other input, including non-digits, yields `false`.
pub fn has_valid_check_digit(code: &str) -> bool {
    match DigitString::parse(code) {
        Ok(code) => code.symbology().has_check_digit() && verify_check_digit(&code).is_ok(),
        Err(_) => false,
    }
}

// =============================================================================
// Check Digit Generation
// =============================================================================

/// Completes an 11-digit (UPC-A) or 12-digit (EAN-13) body with its check digit.
///
/// ## Example
/// ```rust
/// use gochi_core::barcode::calculate_check_digit;
/// use gochi_core::BarcodeError;
///
/// assert_eq!(calculate_check_digit("03600029145").unwrap(), "036000291452");
/// assert_eq!(
///     calculate_check_digit("1234"),
///     Err(BarcodeError::InvalidBodyLength { length: 4 })
/// );
/// ```
pub fn calculate_check_digit(partial: &str) -> Result<String, BarcodeError> {
    let body = DigitString::parse(partial)?;

    if !matches!(body.len(), UPC_A_BODY_LENGTH | EAN_13_BODY_LENGTH) {
        return Err(BarcodeError::InvalidBodyLength { length: body.len() });
    }

    let digits: Vec<u8> = body.digits().collect();
    let check = check_digit(&digits);

    let mut code = body.into_string();
    code.push(char::from(b'0' + check));
    Ok(code)
}

// =============================================================================
// Display
// =============================================================================

/// Groups a code for display.
///
/// Only all-digit codes of length 13, 12 or 8 are grouped; anything else is
/// returned normalized but otherwise untouched. No check digit validation.
///
/// ## Example
/// ```rust
/// use gochi_core::barcode::format;
///
/// assert_eq!(format("7501234567890"), "750 1234 56789 0");
/// assert_eq!(format("012345678905"), "0 12345 67890 5");
/// assert_eq!(format("96385074"), "9638 5074");
/// assert_eq!(format("12-34"), "1234");
/// ```
pub fn format(code: &str) -> String {
    let code = normalize(code);

    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return code;
    }

    let groups: &[usize] = match Symbology::from_length(code.len()) {
        Symbology::Ean13 => &[3, 4, 5, 1],
        Symbology::UpcA => &[1, 5, 5, 1],
        Symbology::Ean8 => &[4, 4],
        _ => return code,
    };

    let mut formatted = String::with_capacity(code.len() + groups.len());
    let mut start = 0;
    for &width in groups {
        if start > 0 {
            formatted.push(' ');
        }
        formatted.push_str(&code[start..start + width]);
        start += width;
    }

    formatted
}

/// Detects the family from the normalized length.
///
/// ## Example
/// ```rust
/// use gochi_core::barcode::detect_type;
/// use gochi_core::Symbology;
///
/// assert_eq!(detect_type("7501234567890"), Symbology::Ean13);
/// assert_eq!(detect_type("99"), Symbology::Unknown);
/// ```
pub fn detect_type(code: &str) -> Symbology {
    Symbology::from_length(normalize(code).chars().count())
}

/// Collects everything the UI shows about one input code.
pub fn describe(code: &str) -> BarcodeInfo {
    BarcodeInfo {
        code: normalize(code),
        formatted: format(code),
        symbology: detect_type(code),
        valid: is_valid(code),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
