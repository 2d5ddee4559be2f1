use std::fmt;

/// A non-fatal resolution gap the operator should know about before
/// submitting the document to a bank.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Notice {
    /// The counter-party has no default bank account configured.
    MissingBankAccount { counter_party: String },
    /// The counter-party references a bank-account record that does not
    /// exist in storage.
    DanglingBankAccount {
        counter_party: String,
        bank_account: String,
    },
    /// The counter-party record itself does not exist in storage.
    UnknownCounterParty { counter_party: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBankAccount { counter_party } => write!(
                f,
                "counter-party {counter_party} has no default bank account; paying with defaulted values"
            ),
            Self::DanglingBankAccount {
                counter_party,
                bank_account,
            } => write!(
                f,
                "bank account {bank_account} not found for counter-party {counter_party}; paying with defaulted values"
            ),
            Self::UnknownCounterParty { counter_party } => write!(
                f,
                "counter-party {counter_party} not found; paying with defaulted values"
            ),
        }
    }
}

/// Sink for operator notices.
///
/// Implementations must not block and must not fail the export — the
/// pipeline fires and forgets.
pub trait OperatorNotifier {
    fn notify(&self, notice: &Notice);
}

/// Discards every notice.
pub struct NullNotifier;

impl OperatorNotifier for NullNotifier {
    fn notify(&self, _notice: &Notice) {}
}

/// Emits each notice as a `tracing` warn event.
pub struct TracingNotifier;

impl OperatorNotifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::warn!(%notice, "degraded counter-party resolution");
    }
}
