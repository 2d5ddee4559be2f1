use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zahlung::core::*;
use zahlung::export::*;

fn main() {
    // Fixture store standing in for the accounting backend
    let mut store = MemoryStore::new();
    store.insert_counter_party(CounterParty {
        id: "SUP-001".into(),
        name: "Lieferant GmbH".into(),
        country: Some("DE".into()),
        default_bank_account: Some("BA-001".into()),
    });
    store.insert_bank_account(BankAccount {
        id: "BA-001".into(),
        iban: Some("DE89370400440532013000".into()),
        address: Some("Lindenstraße 5\n80331 München".into()),
    });
    store.insert_payment_record(PaymentRecord {
        id: "PINV-0001".into(),
        amount: dec!(100.00),
        currency: "EUR".into(),
        counter_party: "SUP-001".into(),
        counter_party_name: "Lieferant GmbH".into(),
        posting_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        remarks: None,
    });
    store.insert_payment_record(PaymentRecord {
        id: "PINV-0002".into(),
        amount: dec!(250.50),
        currency: "EUR".into(),
        counter_party: "SUP-001".into(),
        counter_party_name: "Lieferant GmbH".into(),
        posting_date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
        remarks: Some("Rechnung Juli".into()),
    });

    let request = PaymentRequestBuilder::new("2026-08-14", "ACME GmbH", "AT611904300234573201")
        .debtor_bic("GIBAATWWXXX")
        .debtor_country("AT")
        .address_text("Hauptstraße 1\n1010 Wien")
        .payment_ids_csv("PINV-0001,PINV-0002")
        .build()
        .expect("request should build");

    for finding in validate_request(&request) {
        eprintln!("warning: {finding}");
    }

    let export = export_payment_instruction(
        &store,
        &TracingNotifier,
        &ExportConfig::default(),
        &request,
    )
    .expect("export should succeed");

    println!("File:      {}", export.filename);
    println!("Requested: {}", export.requested);
    println!("Resolved:  {}", export.resolved);
    println!("---");
    println!("{}", export.xml);
}
