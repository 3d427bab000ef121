use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default invoice currency (ISO 4217).
pub const DEFAULT_CURRENCY: &str = "SAR";

/// A completed sale rendered as a fiscal invoice.
///
/// Created once per sale and never mutated after the pipeline has run over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Globally unique identifier, generated by the caller.
    pub uuid: String,
    /// Sequential, human-readable invoice number (e.g. "INV-0001").
    pub number: String,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Issue time.
    pub issue_time: NaiveTime,
    /// Combined date-time as it appears in the QR payload.
    pub timestamp: String,
    /// Seller's legal name.
    pub seller_name: String,
    /// Seller's VAT registration number.
    pub vat_number: String,
    /// Buyer's name, if known.
    pub customer_name: Option<String>,
    /// Base64 digest of the immediately preceding invoice in the issuing sequence.
    pub previous_invoice_hash: Option<String>,
    /// Invoice counter of the issuing device.
    pub counter: Option<u64>,
    /// Ordered sale lines.
    pub items: Vec<InvoiceItem>,
    /// Reserved. Carried for audit, never applied to totals.
    pub discount: Option<Decimal>,
    /// Currency code (defaults to "SAR").
    pub currency: String,
}

/// One sale line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Item name, possibly bilingual.
    pub name: String,
    /// Quantity sold.
    pub quantity: Decimal,
    /// Unit price excluding tax.
    pub price: Decimal,
}

impl InvoiceItem {
    pub fn new(name: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Derived invoice totals. Recomputed from the items whenever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of `price * quantity` over all items.
    pub subtotal: Decimal,
    /// `subtotal * VAT_RATE`.
    pub vat: Decimal,
    /// `subtotal + vat`.
    pub total: Decimal,
}
