use super::store::RecordStore;
use crate::core::{ExportError, PaymentRecord};

/// Fetch the payment records for the requested ids.
///
/// Ids that resolve to nothing are dropped; the export proceeds with the
/// found subset, and the caller can compare counts on the result. Only a
/// completely empty outcome aborts.
pub fn fetch_records<S>(store: &S, ids: &[String]) -> Result<Vec<PaymentRecord>, ExportError>
where
    S: RecordStore + ?Sized,
{
    if ids.is_empty() {
        return Err(ExportError::InvalidInput(
            "payment id list must not be empty".into(),
        ));
    }

    let records = store.payment_records_by_ids(ids)?;
    if records.is_empty() {
        return Err(ExportError::NotFound(format!(
            "no payment records found for {} requested id(s)",
            ids.len()
        )));
    }
    Ok(records)
}
