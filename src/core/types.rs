use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel rendered where a bank identifier is not on file.
///
/// SEPA scheme rulebooks accept `NOTPROVIDED` for an absent BIC; this
/// profile additionally uses it for an absent creditor IBAN so a draft
/// document can still be produced and inspected by the operator.
pub const NOT_PROVIDED: &str = "NOTPROVIDED";

/// The export-time input: which records to pay and who is paying.
///
/// Immutable for the duration of one export. Build via
/// [`PaymentRequestBuilder`](crate::core::PaymentRequestBuilder).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Ordered ids of the payment records to include.
    pub payment_ids: Vec<String>,
    /// ReqdExctnDt: requested execution date, ISO `YYYY-MM-DD`.
    /// Passed through to the document verbatim — not validated here.
    pub execution_date: String,
    /// Dbtr/Nm and InitgPty/Nm: name of the paying party.
    pub debtor_name: String,
    /// DbtrAcct IBAN.
    pub debtor_iban: String,
    /// DbtrAgt BIC. Rendered as `NOTPROVIDED` when absent.
    pub debtor_bic: Option<String>,
    /// Dbtr/PstlAdr/AdrLine entries, in order.
    pub debtor_address: Vec<String>,
    /// Dbtr/PstlAdr/Ctry: ISO 3166-1 alpha-2 country code.
    pub debtor_country: String,
}

/// One payable item, projected from external storage at export time.
///
/// Read-only snapshot; the source of truth stays in the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Record id; doubles as EndToEndId and as the remittance fallback.
    pub id: String,
    /// Amount payable. Rescaled to 2 decimal places on the wire.
    pub amount: Decimal,
    /// ISO 4217 currency code of the amount.
    pub currency: String,
    /// Id of the counter-party to be credited.
    pub counter_party: String,
    /// Display name of the counter-party as recorded on the item.
    pub counter_party_name: String,
    /// Posting date of the underlying record.
    pub posting_date: NaiveDate,
    /// Free-text remittance note. Falls back to the record id.
    pub remarks: Option<String>,
}

/// Counter-party master-data snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterParty {
    pub id: String,
    pub name: String,
    /// Explicit country code, if maintained.
    pub country: Option<String>,
    /// Reference to the counter-party's default bank-account record.
    pub default_bank_account: Option<String>,
}

/// Bank-account master-data snapshot.
///
/// `address` is plain newline-separated text; extracting it from richer
/// representations (HTML and the like) is the storage adapter's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub iban: Option<String>,
    pub address: Option<String>,
}

/// Banking identity resolved for one payment record's counter-party.
///
/// Derived, never persisted — recomputed on every export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterPartyBankInfo {
    /// CdtrAcct IBAN, `NOTPROVIDED` when no account is on file.
    pub iban: String,
    /// CdtrAgt BIC. Always `NOTPROVIDED` — counter-party BIC resolution
    /// is not part of this profile; only the debtor's own BIC is taken
    /// as input.
    pub bic: String,
    /// Cdtr/PstlAdr/Ctry: explicit counter-party country, else the
    /// configured fallback.
    pub country: String,
    /// Cdtr/PstlAdr/AdrLine entries: trimmed, empties dropped.
    pub address_lines: Vec<String>,
}

/// Aggregate root of one export: group header figures plus the ordered
/// transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SepaBatch {
    /// MsgId: fresh per export, time prefix + random suffix.
    pub message_id: String,
    /// PmtInfId: the first 16 characters of the message id.
    pub batch_id: String,
    /// CreDtTm: creation instant, rendered to second precision.
    pub created_at: NaiveDateTime,
    /// NbOfTxs. Always equals `transactions.len()`.
    pub transaction_count: usize,
    /// CtrlSum: decimal-exact sum of all transaction amounts.
    pub control_sum: Decimal,
    /// Transactions in input-record order.
    pub transactions: Vec<SepaTransaction>,
}

/// One credit transfer instruction within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SepaTransaction {
    /// InstrId: 1-based ordinal, zero-padded to 8 digits.
    pub instruction_id: String,
    /// EndToEndId: the source payment record id, unique within the batch.
    pub end_to_end_id: String,
    /// InstdAmt, rescaled to 2 decimal places. Currency is EUR in this
    /// profile.
    pub amount: Decimal,
    /// Cdtr/Nm: display name, falling back to the counter-party id.
    pub creditor_name: String,
    /// Cdtr/PstlAdr/Ctry.
    pub creditor_country: String,
    /// Cdtr/PstlAdr/AdrLine entries.
    pub creditor_address_lines: Vec<String>,
    /// CdtrAcct IBAN or `NOTPROVIDED`.
    pub creditor_iban: String,
    /// CdtrAgt BIC — `NOTPROVIDED` throughout this profile.
    pub creditor_bic: String,
    /// RmtInf/Ustrd: remarks, or the record id when no remarks exist.
    pub remittance: String,
}
