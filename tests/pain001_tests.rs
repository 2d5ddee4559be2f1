#![cfg(feature = "pain001")]

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;
use zahlung::core::*;
use zahlung::pain001;

fn created_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 6)
        .unwrap()
        .and_hms_opt(14, 30, 5)
        .unwrap()
}

fn request() -> PaymentRequest {
    PaymentRequestBuilder::new("2026-08-14", "ACME GmbH", "AT611904300234573201")
        .debtor_bic("GIBAATWWXXX")
        .debtor_country("AT")
        .address_line("Hauptstraße 1")
        .address_line("1010 Wien")
        .payment_ids(["PINV-0001", "PINV-0002"])
        .build()
        .unwrap()
}

fn transaction(n: usize, id: &str) -> SepaTransaction {
    SepaTransaction {
        instruction_id: format!("{n:08}"),
        end_to_end_id: id.into(),
        amount: dec!(100.00),
        creditor_name: "Lieferant GmbH".into(),
        creditor_country: "AT".into(),
        creditor_address_lines: vec!["Lindengasse 5".into(), "4020 Linz".into()],
        creditor_iban: "AT483200000012345864".into(),
        creditor_bic: NOT_PROVIDED.into(),
        remittance: id.into(),
    }
}

fn batch() -> SepaBatch {
    let transactions = vec![transaction(1, "PINV-0001"), transaction(2, "PINV-0002")];
    SepaBatch {
        message_id: "08061430abcdef123456".into(),
        batch_id: "08061430abcdef12".into(),
        created_at: created_at(),
        transaction_count: transactions.len(),
        control_sum: dec!(200.00),
        transactions,
    }
}

// ---------------------------------------------------------------------------
// Document structure
// ---------------------------------------------------------------------------

#[test]
fn document_declaration_and_namespace() {
    let xml = pain001::to_pain001_xml(&request(), &batch()).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("xmlns=\"ISO:pain.001.001.03:APC:STUZZA:payments:003\""));
    assert!(xml.contains("xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""));
    assert!(xml.contains("<CstmrCdtTrfInitn>"));
}

#[test]
fn group_header_figures() {
    let xml = pain001::to_pain001_xml(&request(), &batch()).unwrap();
    assert!(xml.contains("<MsgId>08061430abcdef123456</MsgId>"));
    assert!(xml.contains("<CreDtTm>2026-08-06T14:30:05</CreDtTm>"));
    assert!(xml.contains("<NbOfTxs>2</NbOfTxs>"));
    assert!(xml.contains("<CtrlSum>200.00</CtrlSum>"));
    assert!(xml.contains("<Nm>ACME GmbH</Nm>"));
}

#[test]
fn payment_information_block() {
    let xml = pain001::to_pain001_xml(&request(), &batch()).unwrap();
    assert!(xml.contains("<PmtInfId>08061430abcdef12</PmtInfId>"));
    assert!(xml.contains("<PmtMtd>TRF</PmtMtd>"));
    assert!(xml.contains("<BtchBookg>true</BtchBookg>"));
    assert!(xml.contains("<Cd>SEPA</Cd>"));
    assert!(xml.contains("<ReqdExctnDt>2026-08-14</ReqdExctnDt>"));
    assert!(xml.contains("<IBAN>AT611904300234573201</IBAN>"));
    assert!(xml.contains("<Ccy>EUR</Ccy>"));
    assert!(xml.contains("<BIC>GIBAATWWXXX</BIC>"));
    assert!(xml.contains("<ChrgBr>SLEV</ChrgBr>"));
    assert!(xml.contains("<AdrLine>Hauptstraße 1</AdrLine>"));
    assert!(xml.contains("<AdrLine>1010 Wien</AdrLine>"));
    // exactly one batch per export
    assert_eq!(xml.matches("<PmtInf>").count(), 1);
}

#[test]
fn transaction_blocks_in_order() {
    let xml = pain001::to_pain001_xml(&request(), &batch()).unwrap();
    assert_eq!(xml.matches("<CdtTrfTxInf>").count(), 2);
    assert!(xml.contains("<InstrId>00000001</InstrId>"));
    assert!(xml.contains("<InstrId>00000002</InstrId>"));
    assert!(xml.contains("<EndToEndId>PINV-0001</EndToEndId>"));
    assert!(xml.contains("<InstdAmt Ccy=\"EUR\">100.00</InstdAmt>"));
    assert!(xml.contains("<Ustrd>PINV-0001</Ustrd>"));

    let first = xml.find("<EndToEndId>PINV-0001</EndToEndId>").unwrap();
    let second = xml.find("<EndToEndId>PINV-0002</EndToEndId>").unwrap();
    assert!(first < second);
}

#[test]
fn missing_debtor_bic_renders_sentinel() {
    let mut request = request();
    request.debtor_bic = None;
    let xml = pain001::to_pain001_xml(&request, &batch()).unwrap();
    // debtor agent plus the two creditor agents
    assert_eq!(xml.matches("<BIC>NOTPROVIDED</BIC>").count(), 3);
    assert!(!xml.contains("GIBAATWWXXX"));
}

#[test]
fn unresolved_creditor_renders_sentinels_and_fallback_country() {
    let mut batch = batch();
    batch.transactions[0].creditor_iban = NOT_PROVIDED.into();
    batch.transactions[0].creditor_address_lines.clear();
    let xml = pain001::to_pain001_xml(&request(), &batch).unwrap();
    assert!(xml.contains("<IBAN>NOTPROVIDED</IBAN>"));
    // CdtrAgt BIC is the sentinel for every transaction in this profile
    assert_eq!(xml.matches("<BIC>NOTPROVIDED</BIC>").count(), 2);
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

#[test]
fn user_text_is_escaped() {
    let mut request = request();
    request.debtor_name = "Müller & Söhne <KG>".into();
    let mut batch = batch();
    batch.transactions[0].creditor_name = "\"Quote\" & 'Apostroph'".into();
    batch.transactions[0].remittance = "A < B > C".into();

    let xml = pain001::to_pain001_xml(&request, &batch).unwrap();
    assert!(xml.contains("Müller &amp; Söhne &lt;KG&gt;"));
    assert!(xml.contains("A &lt; B &gt; C"));
    assert!(!xml.contains("<KG>"));
}

// ---------------------------------------------------------------------------
// Structural idempotence
// ---------------------------------------------------------------------------

#[test]
fn identical_inputs_yield_identical_documents() {
    let request = request();
    let batch = batch();
    let a = pain001::to_pain001_xml(&request, &batch).unwrap();
    let b = pain001::to_pain001_xml(&request, &batch).unwrap();
    assert_eq!(a, b);
}

#[test]
fn only_generated_fields_differ_between_exports() {
    let request = request();
    let mut second = batch();
    second.message_id = "08061431xyzxyz654321".into();
    second.batch_id = "08061431xyzxyz65".into();
    second.created_at = created_at() + chrono::Duration::seconds(60);

    let a = pain001::to_pain001_xml(&request, &batch()).unwrap();
    let b = pain001::to_pain001_xml(&request, &second).unwrap();

    // same element structure: line counts match, only header values differ
    assert_eq!(a.lines().count(), b.lines().count());
    let differing: Vec<_> = a.lines().zip(b.lines()).filter(|(x, y)| x != y).collect();
    assert_eq!(differing.len(), 3); // MsgId, CreDtTm, PmtInfId
}
