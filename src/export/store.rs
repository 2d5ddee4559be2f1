use std::collections::HashMap;

use crate::core::{BankAccount, CounterParty, ExportError, PaymentRecord};

/// Read access to the accounting records backing an export.
///
/// Not-found is a distinct, non-error outcome: lookups return `Ok(None)`
/// (or a shorter record list) when a record does not exist, and
/// `ExportError::Storage` only when the store itself failed to answer.
/// Retries and timeouts are the implementor's concern.
pub trait RecordStore {
    /// Fetch the payment records matching `ids`, projecting the fixed
    /// field set, in the order of `ids`. Unknown ids are skipped.
    fn payment_records_by_ids(&self, ids: &[String]) -> Result<Vec<PaymentRecord>, ExportError>;

    /// Fetch one counter-party record by id.
    fn counter_party(&self, id: &str) -> Result<Option<CounterParty>, ExportError>;

    /// Fetch one bank-account record by id.
    fn bank_account(&self, id: &str) -> Result<Option<BankAccount>, ExportError>;
}

/// In-memory [`RecordStore`] for tests, demos, and small fixtures.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    payment_records: HashMap<String, PaymentRecord>,
    counter_parties: HashMap<String, CounterParty>,
    bank_accounts: HashMap<String, BankAccount>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_payment_record(&mut self, record: PaymentRecord) {
        self.payment_records.insert(record.id.clone(), record);
    }

    pub fn insert_counter_party(&mut self, counter_party: CounterParty) {
        self.counter_parties
            .insert(counter_party.id.clone(), counter_party);
    }

    pub fn insert_bank_account(&mut self, account: BankAccount) {
        self.bank_accounts.insert(account.id.clone(), account);
    }
}

impl RecordStore for MemoryStore {
    fn payment_records_by_ids(&self, ids: &[String]) -> Result<Vec<PaymentRecord>, ExportError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.payment_records.get(id))
            .cloned()
            .collect())
    }

    fn counter_party(&self, id: &str) -> Result<Option<CounterParty>, ExportError> {
        Ok(self.counter_parties.get(id).cloned())
    }

    fn bank_account(&self, id: &str) -> Result<Option<BankAccount>, ExportError> {
        Ok(self.bank_accounts.get(id).cloned())
    }
}
