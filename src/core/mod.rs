//! Core payment data model, request building, and validation.
//!
//! This module provides the snapshot types flowing through one export —
//! the debtor-side request, the payable records, and the resolved SEPA
//! batch — together with offline IBAN and SEPA-area checks.

mod builder;
mod error;
mod iban;
mod types;
mod validation;
pub mod countries;

pub use builder::*;
pub use countries::is_sepa_country;
pub use error::*;
pub use iban::*;
pub use types::*;
pub use validation::*;
