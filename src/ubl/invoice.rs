use super::writer::{XmlResult, XmlWriter};
use super::{
    ADDITIONAL_REF_COUNTER, ADDITIONAL_REF_PREVIOUS_HASH, INVOICE_TYPE_CODE, PROFILE_ID,
    STANDARD_TAX_CATEGORY, ubl_ns,
};
use crate::core::*;

/// Render an invoice as canonical UBL-style XML.
///
/// The output is a single line with a fixed element order. The same `Invoice`
/// always produces byte-identical output, which is what the invoice hash is
/// computed over. Errors only surface from the underlying writer.
pub fn build_invoice_xml(invoice: &Invoice) -> XmlResult {
    let currency = invoice.currency.as_str();
    let totals = calculate_totals(&invoice.items);
    let mut w = XmlWriter::new()?;

    w.start_element_with_attrs(
        "Invoice",
        &[
            ("xmlns", ubl_ns::INVOICE),
            ("xmlns:cac", ubl_ns::CAC),
            ("xmlns:cbc", ubl_ns::CBC),
            ("xmlns:ext", ubl_ns::EXT),
        ],
    )?;

    w.text_element("cbc:ProfileID", PROFILE_ID)?;
    w.text_element("cbc:ID", &invoice.number)?;
    w.text_element("cbc:UUID", &invoice.uuid)?;
    w.text_element("cbc:IssueDate", &invoice.issue_date.format("%Y-%m-%d").to_string())?;
    w.text_element("cbc:IssueTime", &invoice.issue_time.format("%H:%M:%S").to_string())?;
    w.text_element("cbc:InvoiceTypeCode", INVOICE_TYPE_CODE)?;

    // Chain references
    if let Some(counter) = invoice.counter {
        w.start_element("cac:AdditionalDocumentReference")?;
        w.text_element("cbc:ID", ADDITIONAL_REF_COUNTER)?;
        w.text_element("cbc:UUID", &counter.to_string())?;
        w.end_element("cac:AdditionalDocumentReference")?;
    }
    if let Some(pih) = &invoice.previous_invoice_hash {
        w.start_element("cac:AdditionalDocumentReference")?;
        w.text_element("cbc:ID", ADDITIONAL_REF_PREVIOUS_HASH)?;
        w.start_element("cac:Attachment")?;
        w.text_element_with_attrs(
            "cbc:EmbeddedDocumentBinaryObject",
            pih,
            &[("mimeCode", "text/plain")],
        )?;
        w.end_element("cac:Attachment")?;
        w.end_element("cac:AdditionalDocumentReference")?;
    }

    // Supplier
    w.start_element("cac:AccountingSupplierParty")?;
    w.start_element("cac:Party")?;
    w.start_element("cac:PartyLegalEntity")?;
    w.text_element("cbc:RegistrationName", &invoice.seller_name)?;
    w.end_element("cac:PartyLegalEntity")?;
    w.start_element("cac:PartyTaxScheme")?;
    w.text_element("cbc:CompanyID", &invoice.vat_number)?;
    w.vat_scheme()?;
    w.end_element("cac:PartyTaxScheme")?;
    w.end_element("cac:Party")?;
    w.end_element("cac:AccountingSupplierParty")?;

    // Customer
    w.start_element("cac:AccountingCustomerParty")?;
    w.start_element("cac:Party")?;
    w.start_element("cac:PartyLegalEntity")?;
    w.text_element(
        "cbc:RegistrationName",
        invoice.customer_name.as_deref().unwrap_or(""),
    )?;
    w.end_element("cac:PartyLegalEntity")?;
    w.end_element("cac:Party")?;
    w.end_element("cac:AccountingCustomerParty")?;

    for (i, item) in invoice.items.iter().enumerate() {
        write_line(&mut w, i + 1, item, currency)?;
    }

    w.start_element("cac:TaxTotal")?;
    w.amount_element("cbc:TaxAmount", totals.vat, currency)?;
    w.end_element("cac:TaxTotal")?;

    // No document-level allowances: tax-exclusive equals the line sum and
    // payable equals tax-inclusive.
    w.start_element("cac:LegalMonetaryTotal")?;
    w.amount_element("cbc:LineExtensionAmount", totals.subtotal, currency)?;
    w.amount_element("cbc:TaxExclusiveAmount", totals.subtotal, currency)?;
    w.amount_element("cbc:TaxInclusiveAmount", totals.total, currency)?;
    w.amount_element("cbc:PayableAmount", totals.total, currency)?;
    w.end_element("cac:LegalMonetaryTotal")?;

    w.end_element("Invoice")?;
    w.into_string()
}

fn write_line(
    w: &mut XmlWriter,
    line_no: usize,
    item: &InvoiceItem,
    currency: &str,
) -> Result<(), FatooraError> {
    w.start_element("cac:InvoiceLine")?;
    w.text_element("cbc:ID", &line_no.to_string())?;
    w.text_element("cbc:InvoicedQuantity", &format_quantity(item.quantity))?;
    w.amount_element("cbc:LineExtensionAmount", line_extension_amount(item), currency)?;

    w.start_element("cac:TaxTotal")?;
    w.amount_element("cbc:TaxAmount", line_tax_amount(item), currency)?;
    w.end_element("cac:TaxTotal")?;

    w.start_element("cac:Item")?;
    w.text_element("cbc:Name", &item.name)?;
    w.start_element("cac:ClassifiedTaxCategory")?;
    w.text_element("cbc:ID", STANDARD_TAX_CATEGORY)?;
    w.text_element("cbc:Percent", &VAT_RATE_PERCENT.to_string())?;
    w.vat_scheme()?;
    w.end_element("cac:ClassifiedTaxCategory")?;
    w.end_element("cac:Item")?;

    w.start_element("cac:Price")?;
    w.amount_element("cbc:PriceAmount", item.price, currency)?;
    w.end_element("cac:Price")?;

    w.end_element("cac:InvoiceLine")?;
    Ok(())
}
