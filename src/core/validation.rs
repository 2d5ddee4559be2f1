//! Advisory pre-submission checks.
//!
//! These return every finding rather than failing fast, and are never
//! invoked implicitly by the export path — an export with findings still
//! produces a draft document the operator can inspect.

use rust_decimal::Decimal;

use super::countries::is_sepa_country;
use super::error::ValidationError;
use super::iban::validate_iban;
use super::types::{PaymentRecord, PaymentRequest};

/// Validate the debtor side of a request. Returns all findings.
pub fn validate_request(request: &PaymentRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if request.debtor_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "debtor_name",
            "debtor name must not be empty",
        ));
    }

    if let Err(e) = validate_iban(&request.debtor_iban) {
        errors.push(ValidationError::new("debtor_iban", e.reason));
    }

    if let Some(bic) = &request.debtor_bic {
        if !is_plausible_bic(bic) {
            errors.push(ValidationError::new(
                "debtor_bic",
                "BIC must be 8 or 11 alphanumeric characters",
            ));
        }
    }

    if !is_sepa_country(&request.debtor_country) {
        errors.push(ValidationError::new(
            "debtor_country",
            format!(
                "country code '{}' is not in the SEPA area",
                request.debtor_country
            ),
        ));
    }

    errors
}

/// Validate the fetched record set. Returns all findings.
///
/// Checks the EUR-only profile constraint, positive amounts, and
/// end-to-end id uniqueness within the batch.
pub fn validate_records(records: &[PaymentRecord]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for record in records {
        let field = |name: &str| format!("records.{}.{name}", record.id);

        if record.currency != "EUR" {
            errors.push(ValidationError::new(
                field("currency"),
                format!("currency '{}' — this profile settles EUR only", record.currency),
            ));
        }
        if record.amount <= Decimal::ZERO {
            errors.push(ValidationError::new(
                field("amount"),
                "amount must be positive",
            ));
        }
    }

    let mut seen = std::collections::HashSet::new();
    for record in records {
        if !seen.insert(record.id.as_str()) {
            errors.push(ValidationError::new(
                format!("records.{}.id", record.id),
                "duplicate record id — end-to-end ids must be unique within a batch",
            ));
        }
    }

    errors
}

fn is_plausible_bic(bic: &str) -> bool {
    (bic.len() == 8 || bic.len() == 11) && bic.bytes().all(|b| b.is_ascii_alphanumeric())
}
