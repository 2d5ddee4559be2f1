use chrono::NaiveDateTime;

use super::xml_utils::{XmlResult, XmlWriter};
use super::{PAIN001_NAMESPACE, XSI_NAMESPACE};
use crate::core::{NOT_PROVIDED, PaymentRequest, SepaBatch, SepaTransaction};

/// Generate the pain.001 customer credit transfer initiation document.
///
/// Pure over its inputs: identical request and batch values yield a
/// byte-identical document. Every user-supplied text field is escaped by
/// the writer; fixed codes and generated ids are inserted as-is.
pub fn to_pain001_xml(request: &PaymentRequest, batch: &SepaBatch) -> XmlResult {
    let mut w = XmlWriter::new()?;

    w.start_element_with_attrs(
        "Document",
        &[("xmlns", PAIN001_NAMESPACE), ("xmlns:xsi", XSI_NAMESPACE)],
    )?;
    w.start_element("CstmrCdtTrfInitn")?;

    // Group header
    w.start_element("GrpHdr")?;
    w.text_element("MsgId", &batch.message_id)?;
    w.text_element(
        "CreDtTm",
        &batch.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
    )?;
    w.text_element("NbOfTxs", &batch.transaction_count.to_string())?;
    w.text_element("CtrlSum", &super::xml_utils::format_amount(batch.control_sum))?;
    w.start_element("InitgPty")?;
    w.text_element("Nm", &request.debtor_name)?;
    w.end_element("InitgPty")?;
    w.end_element("GrpHdr")?;

    // Payment information batch — exactly one per export
    w.start_element("PmtInf")?;
    w.text_element("PmtInfId", &batch.batch_id)?;
    w.text_element("PmtMtd", "TRF")?;
    w.text_element("BtchBookg", "true")?;
    w.start_element("PmtTpInf")?;
    w.start_element("SvcLvl")?;
    w.text_element("Cd", "SEPA")?;
    w.end_element("SvcLvl")?;
    w.end_element("PmtTpInf")?;
    // As supplied by the caller — no date validation here
    w.text_element("ReqdExctnDt", &request.execution_date)?;

    w.start_element("Dbtr")?;
    w.text_element("Nm", &request.debtor_name)?;
    w.start_element("PstlAdr")?;
    w.text_element("Ctry", &request.debtor_country)?;
    for line in &request.debtor_address {
        w.text_element("AdrLine", line)?;
    }
    w.end_element("PstlAdr")?;
    w.end_element("Dbtr")?;

    w.start_element("DbtrAcct")?;
    w.start_element("Id")?;
    w.text_element("IBAN", &request.debtor_iban)?;
    w.end_element("Id")?;
    w.text_element("Ccy", "EUR")?;
    w.end_element("DbtrAcct")?;

    w.start_element("DbtrAgt")?;
    w.start_element("FinInstnId")?;
    w.text_element("BIC", request.debtor_bic.as_deref().unwrap_or(NOT_PROVIDED))?;
    w.end_element("FinInstnId")?;
    w.end_element("DbtrAgt")?;

    w.text_element("ChrgBr", "SLEV")?;

    for tx in &batch.transactions {
        write_transaction(&mut w, tx)?;
    }

    w.end_element("PmtInf")?;
    w.end_element("CstmrCdtTrfInitn")?;
    w.end_element("Document")?;

    w.into_string()
}

fn write_transaction(w: &mut XmlWriter, tx: &SepaTransaction) -> Result<(), crate::core::ExportError> {
    w.start_element("CdtTrfTxInf")?;

    w.start_element("PmtId")?;
    w.text_element("InstrId", &tx.instruction_id)?;
    w.text_element("EndToEndId", &tx.end_to_end_id)?;
    w.end_element("PmtId")?;

    w.start_element("Amt")?;
    w.amount_element("InstdAmt", tx.amount, "EUR")?;
    w.end_element("Amt")?;

    w.start_element("CdtrAgt")?;
    w.start_element("FinInstnId")?;
    w.text_element("BIC", &tx.creditor_bic)?;
    w.end_element("FinInstnId")?;
    w.end_element("CdtrAgt")?;

    w.start_element("Cdtr")?;
    w.text_element("Nm", &tx.creditor_name)?;
    w.start_element("PstlAdr")?;
    w.text_element("Ctry", &tx.creditor_country)?;
    for line in &tx.creditor_address_lines {
        w.text_element("AdrLine", line)?;
    }
    w.end_element("PstlAdr")?;
    w.end_element("Cdtr")?;

    w.start_element("CdtrAcct")?;
    w.start_element("Id")?;
    w.text_element("IBAN", &tx.creditor_iban)?;
    w.end_element("Id")?;
    w.end_element("CdtrAcct")?;

    w.start_element("RmtInf")?;
    w.text_element("Ustrd", &tx.remittance)?;
    w.end_element("RmtInf")?;

    w.end_element("CdtTrfTxInf")?;
    Ok(())
}

/// Suggested download filename for a document generated at `now`.
pub fn suggested_filename(now: NaiveDateTime) -> String {
    format!("payment_instruction_{}.xml", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn filename_pattern() {
        let now = NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        assert_eq!(
            suggested_filename(now),
            "payment_instruction_20260806_143005.xml"
        );
    }
}
