//! pain.001 payment instruction XML generation.
//!
//! Emits ISO 20022 "Customer Credit Transfer Initiation" documents in the
//! pain.001.001.03 APC/STUZZA payments profile: one group header, exactly
//! one payment information batch, one transaction block per record.
//!
//! # Example
//!
//! ```no_run
//! use zahlung::core::*;
//! use zahlung::pain001;
//!
//! let request: PaymentRequest = todo!(); // build via PaymentRequestBuilder
//! let batch: SepaBatch = todo!();        // build via export::aggregate
//! let xml = pain001::to_pain001_xml(&request, &batch).unwrap();
//! ```

mod document;
pub(crate) mod xml_utils;

pub use document::{suggested_filename, to_pain001_xml};

/// Document namespace of the supported pain.001 profile.
pub const PAIN001_NAMESPACE: &str = "ISO:pain.001.001.03:APC:STUZZA:payments:003";

/// XML Schema instance namespace carried on the root element.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
