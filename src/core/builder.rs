use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use super::error::{FatooraError, validation_failure};
use super::types::*;
use super::validation;

/// Builder for constructing invoices.
///
/// ```
/// use chrono::NaiveDate;
/// use fatoora::core::*;
/// use rust_decimal_macros::dec;
///
/// let issued = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
/// let invoice = InvoiceBuilder::new("INV-0001", "3cf5ee18-ee25-44ea-a444-2c37ba7f28be", issued)
///     .seller("Acme", "3001234567")
///     .customer("Walk-in Customer")
///     .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.timestamp, "2024-06-15T10:30:00Z");
/// assert_eq!(invoice.currency, "SAR");
/// ```
pub struct InvoiceBuilder {
    uuid: String,
    number: String,
    issued_at: NaiveDateTime,
    timestamp: Option<String>,
    seller: Option<(String, String)>,
    customer_name: Option<String>,
    previous_invoice_hash: Option<String>,
    counter: Option<u64>,
    items: Vec<InvoiceItem>,
    discount: Option<Decimal>,
    currency: String,
}

impl InvoiceBuilder {
    /// Start an invoice issued at `issued_at`, which must be UTC.
    ///
    /// The QR timestamp defaults to `issued_at` with a `Z` suffix. For a
    /// device clock in local time use [`InvoiceBuilder::with_offset`].
    pub fn new(number: impl Into<String>, uuid: impl Into<String>, issued_at: NaiveDateTime) -> Self {
        Self {
            uuid: uuid.into(),
            number: number.into(),
            issued_at,
            timestamp: None,
            seller: None,
            customer_name: None,
            previous_invoice_hash: None,
            counter: None,
            items: Vec::new(),
            discount: None,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Start an invoice from a zone-aware issue time.
    ///
    /// Issue date and time in the XML keep the local wall clock; the QR
    /// timestamp is converted to UTC.
    pub fn with_offset(
        number: impl Into<String>,
        uuid: impl Into<String>,
        issued_at: DateTime<FixedOffset>,
    ) -> Self {
        let utc = issued_at.with_timezone(&Utc);
        Self::new(number, uuid, issued_at.naive_local())
            .timestamp(utc.format("%Y-%m-%dT%H:%M:%SZ").to_string())
    }

    /// Seller legal name and VAT registration number.
    pub fn seller(mut self, name: impl Into<String>, vat_number: impl Into<String>) -> Self {
        self.seller = Some((name.into(), vat_number.into()));
        self
    }

    pub fn customer(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Override the QR timestamp (defaults to `YYYY-MM-DDTHH:MM:SSZ` of the issue time).
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn previous_invoice_hash(mut self, hash: impl Into<String>) -> Self {
        self.previous_invoice_hash = Some(hash.into());
        self
    }

    pub fn counter(mut self, counter: u64) -> Self {
        self.counter = Some(counter);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn discount(mut self, amount: Decimal) -> Self {
        self.discount = Some(amount);
        self
    }

    pub fn add_item(mut self, item: InvoiceItem) -> Self {
        self.items.push(item);
        self
    }

    /// Build the invoice and run structural validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, FatooraError> {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }

        Ok(invoice)
    }

    /// Build without validation, e.g. when importing stored invoices.
    pub fn build_unchecked(self) -> Result<Invoice, FatooraError> {
        let (seller_name, vat_number) = self
            .seller
            .ok_or_else(|| FatooraError::Builder("seller is required".into()))?;

        let timestamp = self
            .timestamp
            .unwrap_or_else(|| self.issued_at.format("%Y-%m-%dT%H:%M:%SZ").to_string());

        Ok(Invoice {
            uuid: self.uuid,
            number: self.number,
            issue_date: self.issued_at.date(),
            issue_time: self.issued_at.time(),
            timestamp,
            seller_name,
            vat_number,
            customer_name: self.customer_name,
            previous_invoice_hash: self.previous_invoice_hash,
            counter: self.counter,
            items: self.items,
            discount: self.discount,
            currency: self.currency,
        })
    }
}
