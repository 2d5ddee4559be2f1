use super::notify::{Notice, OperatorNotifier};
use super::store::RecordStore;
use super::ExportConfig;
use crate::core::{
    CounterPartyBankInfo, ExportError, NOT_PROVIDED, PaymentRecord, ValidationError,
    split_address_lines,
};

/// Resolve the banking identity for one payment record's counter-party.
///
/// Resolution ladder:
/// 1. counter-party record → its default bank account → IBAN and address;
/// 2. a missing or dangling link degrades to `NOTPROVIDED` / empty with
///    an operator notice, never an error;
/// 3. BIC stays `NOTPROVIDED` throughout — only the debtor's own BIC is
///    taken as input;
/// 4. country comes from the counter-party record when set, else the
///    configured fallback.
///
/// Only storage faults propagate as `Err`; once the input resolved, the
/// export always completes.
pub fn resolve_bank_info<S, N>(
    store: &S,
    notifier: &N,
    config: &ExportConfig,
    record: &PaymentRecord,
) -> Result<CounterPartyBankInfo, ExportError>
where
    S: RecordStore + ?Sized,
    N: OperatorNotifier + ?Sized,
{
    let mut info = CounterPartyBankInfo {
        iban: NOT_PROVIDED.into(),
        bic: NOT_PROVIDED.into(),
        country: config.fallback_country.clone(),
        address_lines: Vec::new(),
    };

    let Some(counter_party) = store.counter_party(&record.counter_party)? else {
        notifier.notify(&Notice::UnknownCounterParty {
            counter_party: record.counter_party.clone(),
        });
        return Ok(info);
    };

    if let Some(country) = counter_party
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        info.country = country.to_string();
    }

    let Some(account_id) = &counter_party.default_bank_account else {
        notifier.notify(&Notice::MissingBankAccount {
            counter_party: counter_party.id.clone(),
        });
        return Ok(info);
    };

    let Some(account) = store.bank_account(account_id)? else {
        notifier.notify(&Notice::DanglingBankAccount {
            counter_party: counter_party.id.clone(),
            bank_account: account_id.clone(),
        });
        return Ok(info);
    };

    if let Some(iban) = account.iban.as_deref().map(str::trim).filter(|i| !i.is_empty()) {
        info.iban = iban.to_string();
    }
    if let Some(address) = &account.address {
        info.address_lines = split_address_lines(address);
    }

    Ok(info)
}

/// Preflight check: is this counter-party payable by SEPA transfer?
///
/// Reports a missing default bank account, a dangling bank-account
/// reference, or a bank account without an IBAN, without running an
/// export. An empty result means the counter-party is payable.
pub fn check_counter_party_banking<S>(
    store: &S,
    counter_party_id: &str,
) -> Result<Vec<ValidationError>, ExportError>
where
    S: RecordStore + ?Sized,
{
    let mut errors = Vec::new();

    let Some(counter_party) = store.counter_party(counter_party_id)? else {
        errors.push(ValidationError::new(
            "counter_party",
            format!("counter-party '{counter_party_id}' not found"),
        ));
        return Ok(errors);
    };

    let Some(account_id) = &counter_party.default_bank_account else {
        errors.push(ValidationError::new(
            "counter_party.default_bank_account",
            format!("counter-party '{counter_party_id}' has no default bank account configured"),
        ));
        return Ok(errors);
    };

    match store.bank_account(account_id)? {
        None => errors.push(ValidationError::new(
            "counter_party.default_bank_account",
            format!("bank account '{account_id}' not found"),
        )),
        Some(account) => {
            if account.iban.as_deref().is_none_or(|i| i.trim().is_empty()) {
                errors.push(ValidationError::new(
                    "bank_account.iban",
                    format!("bank account '{account_id}' is missing an IBAN"),
                ));
            }
        }
    }

    Ok(errors)
}
