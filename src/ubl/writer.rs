use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use rust_decimal::Decimal;
use std::io::Cursor;

use crate::core::{FatooraError, format_amount};

pub type XmlResult = Result<String, FatooraError>;

fn xml_io(e: std::io::Error) -> FatooraError {
    FatooraError::Xml(format!("XML write error: {e}"))
}

/// Compact XML writer: no indentation, no whitespace between elements.
///
/// Text and attribute values are escaped (`& < > " '`) by quick-xml.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    /// Start a document with the `<?xml version="1.0" encoding="UTF-8"?>` prolog.
    pub fn new() -> Result<Self, FatooraError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> XmlResult {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| FatooraError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, FatooraError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, FatooraError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, FatooraError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, FatooraError> {
        self.start_element(name)?;
        self.write_text(text)?;
        self.end_element(name)
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, FatooraError> {
        self.start_element_with_attrs(name, attrs)?;
        self.write_text(text)?;
        self.end_element(name)
    }

    /// Write a two-decimal monetary amount with a currencyID attribute.
    pub fn amount_element(
        &mut self,
        name: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<&mut Self, FatooraError> {
        self.text_element_with_attrs(name, &format_amount(amount), &[("currencyID", currency)])
    }

    /// Write `<cac:TaxScheme><cbc:ID>VAT</cbc:ID></cac:TaxScheme>`.
    pub fn vat_scheme(&mut self) -> Result<&mut Self, FatooraError> {
        self.start_element("cac:TaxScheme")?;
        self.text_element("cbc:ID", "VAT")?;
        self.end_element("cac:TaxScheme")
    }

    fn write_text(&mut self, text: &str) -> Result<(), FatooraError> {
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn writes_prolog_and_compact_elements() {
        let mut w = XmlWriter::new().unwrap();
        w.start_element("a").unwrap();
        w.text_element("b", "x").unwrap();
        w.amount_element("c", dec!(3.75), "SAR").unwrap();
        w.end_element("a").unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            r#"<?xml version="1.0" encoding="UTF-8"?><a><b>x</b><c currencyID="SAR">3.75</c></a>"#
        );
    }

    #[test]
    fn escapes_all_special_characters() {
        let mut w = XmlWriter::new().unwrap();
        w.text_element("n", r#"O'Brien & "Sons" <Ltd>"#).unwrap();
        let xml = w.into_string().unwrap();
        assert!(xml.ends_with("<n>O&apos;Brien &amp; &quot;Sons&quot; &lt;Ltd&gt;</n>"));
    }

    #[test]
    fn empty_text_keeps_both_tags() {
        let mut w = XmlWriter::new().unwrap();
        w.text_element("n", "").unwrap();
        assert!(w.into_string().unwrap().ends_with("<n></n>"));
    }
}
