//! # zahlung
//!
//! SEPA Credit Transfer export library: aggregates payable accounting
//! records into a single batched ISO 20022 pain.001 payment instruction
//! and emits well-formed, escaped XML that banks parse and act upon.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Header totals (`NbOfTxs`, `CtrlSum`) are computed with decimal-exact
//! summation so three records of 0.10 sum to 0.30, to the cent.
//!
//! ## Quick Start
//!
//! ```rust
//! use zahlung::core::*;
//!
//! let request = PaymentRequestBuilder::new("2026-08-14", "ACME GmbH", "AT611904300234573201")
//!     .debtor_bic("GIBAATWWXXX")
//!     .debtor_country("AT")
//!     .address_text("Hauptstraße 1\n1010 Wien")
//!     .payment_ids_csv("PINV-0001,PINV-0002")
//!     .build()
//!     .unwrap();
//!
//! assert!(validate_request(&request).is_empty());
//! assert_eq!(request.payment_ids.len(), 2);
//! ```
//!
//! Generating the document itself requires the `export` feature and a
//! `RecordStore` implementation backed by your accounting storage.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Request/record data model, builder, IBAN & SEPA-area validation |
//! | `pain001` | pain.001.001.03 XML document generation |
//! | `export` | Full export pipeline: record store seam, party resolution, batching, operator notices |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pain001")]
pub mod pain001;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
