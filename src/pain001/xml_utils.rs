use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use rust_decimal::Decimal;
use std::io::Cursor;

use crate::core::ExportError;

pub type XmlResult = Result<String, ExportError>;

fn xml_io(e: std::io::Error) -> ExportError {
    ExportError::Xml(format!("XML write error: {e}"))
}

/// Thin wrapper over a quick-xml writer. Text content and attribute
/// values pass through quick-xml's escaping, so `&`, `<`, `>`, `"`, `'`
/// in user-supplied fields never reach the document raw.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self, ExportError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String, ExportError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| ExportError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, ExportError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, ExportError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, ExportError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, ExportError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write an amount element with its `Ccy` currency attribute.
    pub fn amount_element(
        &mut self,
        name: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<&mut Self, ExportError> {
        let mut elem = BytesStart::new(name);
        elem.push_attribute(("Ccy", currency));
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        self.writer
            .write_event(Event::Text(BytesText::new(&format_amount(amount))))
            .map_err(xml_io)?;
        self.end_element(name)
    }
}

/// Format a monetary amount with exactly two decimal places, as the
/// scheme requires for `InstdAmt` and `CtrlSum`.
pub fn format_amount(d: Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn format_amount_cases() {
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(350.5)), "350.50");
        assert_eq!(format_amount(dec!(0.1)), "0.10");
        assert_eq!(format_amount(dec!(1833.48)), "1833.48");
        assert_eq!(format_amount(dec!(2.345)), "2.34");
        assert_eq!(format_amount(dec!(2.355)), "2.36");
    }

    #[test]
    fn text_is_escaped() {
        let mut w = XmlWriter::new().unwrap();
        w.text_element("Nm", "Müller & Söhne <KG>").unwrap();
        let xml = w.into_string().unwrap();
        assert!(xml.contains("Müller &amp; Söhne &lt;KG&gt;"));
    }
}
