#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;
use zahlung::core::*;
use zahlung::export::aggregate;
use zahlung::pain001;

// Arbitrary free text in every user-supplied field must still produce a
// document, without panicking anywhere in the pipeline.
fuzz_target!(|text: String| {
    let record = PaymentRecord {
        id: "PINV-0001".into(),
        amount: Decimal::new(10050, 2),
        currency: "EUR".into(),
        counter_party: "SUP-001".into(),
        counter_party_name: text.clone(),
        posting_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        remarks: Some(text.clone()),
    };
    let info = CounterPartyBankInfo {
        iban: NOT_PROVIDED.into(),
        bic: NOT_PROVIDED.into(),
        country: "AT".into(),
        address_lines: vec![text.clone()],
    };
    let now = NaiveDate::from_ymd_opt(2026, 8, 6)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let batch = aggregate(&[record], &[info], now);

    let request = PaymentRequestBuilder::new("2026-08-14", text.clone(), text)
        .payment_id("PINV-0001")
        .build()
        .unwrap();
    let _ = pain001::to_pain001_xml(&request, &batch);
});
