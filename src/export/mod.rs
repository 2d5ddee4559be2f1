//! The export pipeline: resolve records, aggregate the batch, resolve
//! counter-party banking details, and emit the pain.001 document.
//!
//! One call to [`export_payment_instruction`] runs the whole pipeline
//! synchronously for a single request. Data flows strictly forward; no
//! stage depends on a later one, and nothing is shared across exports
//! except the caller's record store.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use zahlung::core::*;
//! use zahlung::export::*;
//!
//! let mut store = MemoryStore::new();
//! store.insert_payment_record(PaymentRecord {
//!     id: "PINV-0001".into(),
//!     amount: dec!(100.00),
//!     currency: "EUR".into(),
//!     counter_party: "SUP-001".into(),
//!     counter_party_name: "Lieferant GmbH".into(),
//!     posting_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
//!     remarks: None,
//! });
//!
//! let request = PaymentRequestBuilder::new("2026-08-14", "ACME GmbH", "AT611904300234573201")
//!     .payment_id("PINV-0001")
//!     .build()
//!     .unwrap();
//!
//! let export = export_payment_instruction(&store, &NullNotifier, &ExportConfig::default(), &request).unwrap();
//! assert!(export.xml.contains("<NbOfTxs>1</NbOfTxs>"));
//! ```

mod batch;
mod notify;
mod party;
mod resolve;
mod store;

pub use batch::*;
pub use notify::*;
pub use party::*;
pub use resolve::*;
pub use store::*;

use chrono::Local;

use crate::core::{ExportError, PaymentRequest};
use crate::pain001;

/// Configuration for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Country code used for counter-parties without an explicit one.
    pub fallback_country: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            fallback_country: "AT".into(),
        }
    }
}

impl ExportConfig {
    /// Set the fallback country code for unresolved counter-parties.
    pub fn fallback_country(mut self, code: impl Into<String>) -> Self {
        self.fallback_country = code.into();
        self
    }
}

/// The produced document plus the figures a caller needs to deliver it
/// and to judge completeness.
#[derive(Debug, Clone)]
pub struct PaymentExport {
    /// The pain.001 document text, UTF-8.
    pub xml: String,
    /// Suggested download filename (`payment_instruction_<YYYYMMDD>_<HHMMSS>.xml`).
    pub filename: String,
    /// How many record ids the request named.
    pub requested: usize,
    /// How many records actually resolved. Ids that did not resolve are
    /// dropped from the batch; compare against `requested` to detect that.
    pub resolved: usize,
}

/// Run one export: fetch records, resolve each counter-party's banking
/// identity, aggregate the batch, and build the document.
///
/// Fails only on blocking conditions — empty input, zero resolvable
/// records, storage faults. Per-counter-party resolution gaps degrade to
/// defaults and surface through `notifier`.
pub fn export_payment_instruction<S, N>(
    store: &S,
    notifier: &N,
    config: &ExportConfig,
    request: &PaymentRequest,
) -> Result<PaymentExport, ExportError>
where
    S: RecordStore + ?Sized,
    N: OperatorNotifier + ?Sized,
{
    let records = fetch_records(store, &request.payment_ids)?;

    let mut infos = Vec::with_capacity(records.len());
    for record in &records {
        infos.push(resolve_bank_info(store, notifier, config, record)?);
    }

    let now = Local::now().naive_local();
    let batch = aggregate(&records, &infos, now);
    let xml = pain001::to_pain001_xml(request, &batch)?;

    Ok(PaymentExport {
        xml,
        filename: pain001::suggested_filename(now),
        requested: request.payment_ids.len(),
        resolved: records.len(),
    })
}
