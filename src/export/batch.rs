use chrono::NaiveDateTime;
use rand::Rng;
use rand::distributions::Alphanumeric;
use rust_decimal::Decimal;

use crate::core::{CounterPartyBankInfo, PaymentRecord, SepaBatch, SepaTransaction};

/// Length of the random suffix appended to the time prefix.
const SUFFIX_LEN: usize = 12;

/// Generate a fresh message id: `MMDDHHMM` time prefix plus a random
/// alphanumeric suffix, 20 characters total.
///
/// The suffix is drawn from a CSPRNG on every call, so concurrent exports
/// within the same minute cannot collide. The batch id is the first 16
/// characters, which always covers the full time prefix.
pub fn message_id(now: NaiveDateTime) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}{}", now.format("%m%d%H%M"), suffix)
}

/// Aggregate the resolved records into a batch: header figures plus one
/// transaction per record, in input order.
///
/// Pure over its inputs apart from drawing the message id. The control
/// sum is the `Decimal` sum of the per-transaction amounts after
/// rescaling to 2 decimal places, so it matches the emitted `InstdAmt`
/// values to the cent.
pub fn aggregate(
    records: &[PaymentRecord],
    infos: &[CounterPartyBankInfo],
    now: NaiveDateTime,
) -> SepaBatch {
    debug_assert_eq!(records.len(), infos.len());

    let msg_id = message_id(now);
    let transactions = build_transactions(records, infos);
    let control_sum: Decimal = transactions.iter().map(|tx| tx.amount).sum();

    SepaBatch {
        batch_id: msg_id[..16].to_string(),
        message_id: msg_id,
        created_at: now,
        transaction_count: transactions.len(),
        control_sum,
        transactions,
    }
}

fn build_transactions(
    records: &[PaymentRecord],
    infos: &[CounterPartyBankInfo],
) -> Vec<SepaTransaction> {
    records
        .iter()
        .zip(infos)
        .enumerate()
        .map(|(idx, (record, info))| SepaTransaction {
            instruction_id: format!("{:08}", idx + 1),
            end_to_end_id: record.id.clone(),
            amount: record.amount.round_dp(2),
            creditor_name: if record.counter_party_name.trim().is_empty() {
                record.counter_party.clone()
            } else {
                record.counter_party_name.clone()
            },
            creditor_country: info.country.clone(),
            creditor_address_lines: info.address_lines.clone(),
            creditor_iban: info.iban.clone(),
            creditor_bic: info.bic.clone(),
            remittance: record
                .remarks
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .unwrap_or_else(|| record.id.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NOT_PROVIDED;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn info() -> CounterPartyBankInfo {
        CounterPartyBankInfo {
            iban: "AT611904300234573201".into(),
            bic: NOT_PROVIDED.into(),
            country: "AT".into(),
            address_lines: vec![],
        }
    }

    fn record(id: &str, amount: Decimal) -> PaymentRecord {
        PaymentRecord {
            id: id.into(),
            amount,
            currency: "EUR".into(),
            counter_party: "SUP-001".into(),
            counter_party_name: "Lieferant GmbH".into(),
            posting_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            remarks: None,
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn message_id_shape() {
        let id = message_id(noon());
        assert_eq!(id.len(), 20);
        assert!(id.starts_with("08061200"));
        assert!(id.bytes().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn message_ids_do_not_repeat() {
        let now = noon();
        assert_ne!(message_id(now), message_id(now));
    }

    #[test]
    fn control_sum_is_decimal_exact() {
        let records: Vec<_> = (0..3).map(|i| record(&format!("R{i}"), dec!(0.10))).collect();
        let infos = vec![info(); 3];
        let batch = aggregate(&records, &infos, noon());
        assert_eq!(batch.control_sum, dec!(0.30));
        assert_eq!(batch.transaction_count, 3);
    }

    #[test]
    fn instruction_ids_are_sequential_and_padded() {
        let records: Vec<_> = (0..12).map(|i| record(&format!("R{i}"), dec!(1))).collect();
        let infos = vec![info(); 12];
        let batch = aggregate(&records, &infos, noon());
        assert_eq!(batch.transactions[0].instruction_id, "00000001");
        assert_eq!(batch.transactions[11].instruction_id, "00000012");
    }

    #[test]
    fn batch_id_is_message_id_prefix() {
        let batch = aggregate(&[record("R1", dec!(1))], &[info()], noon());
        assert_eq!(batch.batch_id.len(), 16);
        assert!(batch.message_id.starts_with(&batch.batch_id));
    }

    #[test]
    fn remittance_falls_back_to_record_id() {
        let mut with_remarks = record("R1", dec!(1));
        with_remarks.remarks = Some("Rechnung Juli".into());
        let mut blank_remarks = record("R2", dec!(1));
        blank_remarks.remarks = Some("   ".into());

        let records = vec![with_remarks, blank_remarks, record("R3", dec!(1))];
        let infos = vec![info(); 3];
        let batch = aggregate(&records, &infos, noon());
        assert_eq!(batch.transactions[0].remittance, "Rechnung Juli");
        assert_eq!(batch.transactions[1].remittance, "R2");
        assert_eq!(batch.transactions[2].remittance, "R3");
    }

    #[test]
    fn creditor_name_falls_back_to_counter_party_id() {
        let mut nameless = record("R1", dec!(1));
        nameless.counter_party_name = "".into();
        let batch = aggregate(&[nameless], &[info()], noon());
        assert_eq!(batch.transactions[0].creditor_name, "SUP-001");
    }
}
