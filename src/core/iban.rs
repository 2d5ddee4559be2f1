//! Offline IBAN format and checksum validation (ISO 13616, mod-97).

use std::fmt;

/// Error returned when an IBAN fails format or checksum validation.
#[derive(Debug, Clone)]
pub struct IbanFormatError {
    /// The rejected input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for IbanFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid IBAN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for IbanFormatError {}

/// Strip spaces and uppercase — the electronic IBAN format.
pub fn normalize_iban(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validate an IBAN by format and mod-97 checksum (no registry lookup).
///
/// Accepts paper format with spaces. Returns the normalized electronic
/// form on success.
pub fn validate_iban(input: &str) -> Result<String, IbanFormatError> {
    let iban = normalize_iban(input);

    let err = |reason: &str| IbanFormatError {
        value: input.into(),
        reason: reason.into(),
    };

    if !(15..=34).contains(&iban.len()) {
        return Err(err("length must be between 15 and 34 characters"));
    }
    if !iban.as_bytes()[..2].iter().all(u8::is_ascii_uppercase) {
        return Err(err("must start with a 2-letter country code"));
    }
    if !iban.as_bytes()[2..4].iter().all(u8::is_ascii_digit) {
        return Err(err("check digits must be numeric"));
    }
    if !iban.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(err("only ASCII letters and digits are allowed"));
    }

    // ISO 13616: rotate the first four characters to the end, expand
    // letters to two digits (A=10..Z=35), remainder mod 97 must be 1.
    let rotated = iban.bytes().skip(4).chain(iban.bytes().take(4));
    let mut rem: u32 = 0;
    for b in rotated {
        if b.is_ascii_digit() {
            rem = (rem * 10 + u32::from(b - b'0')) % 97;
        } else {
            rem = (rem * 100 + u32::from(b - b'A') + 10) % 97;
        }
    }
    if rem != 1 {
        return Err(err("checksum verification failed"));
    }

    Ok(iban)
}
