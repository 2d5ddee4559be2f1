//! SEPA scheme geographical scope.
//!
//! Country codes of the states and territories participating in the SEPA
//! credit transfer scheme, per the EPC register.

/// Check whether `code` is part of the SEPA area.
pub fn is_sepa_country(code: &str) -> bool {
    SEPA_COUNTRIES.binary_search(&code).is_ok()
}

/// SEPA participant country codes (37 entries). Sorted for binary search.
static SEPA_COUNTRIES: &[&str] = &[
    "AD", "AT", "BE", "BG", "CH", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GB", "GI", "GR",
    "HR", "HU", "IE", "IS", "IT", "LI", "LT", "LU", "LV", "MC", "MT", "NL", "NO", "PL", "PT", "RO",
    "SE", "SI", "SK", "SM", "VA",
];
