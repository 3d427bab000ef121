//! Canonical UBL-style invoice XML.
//!
//! The document is written with a fixed element order and no insignificant
//! whitespace, so the invoice hash over it is reproducible. This is a fixed
//! serialization, not W3C canonicalization.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fatoora::core::*;
//! use fatoora::ubl;
//! use rust_decimal_macros::dec;
//!
//! let issued = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
//! let invoice = InvoiceBuilder::new("INV-0001", "3cf5ee18-ee25-44ea-a444-2c37ba7f28be", issued)
//!     .seller("Acme", "3001234567")
//!     .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
//!     .build()
//!     .unwrap();
//!
//! let xml = ubl::build_invoice_xml(&invoice).unwrap();
//! assert!(xml.contains("<cbc:PayableAmount currencyID=\"SAR\">28.75</cbc:PayableAmount>"));
//! ```

mod invoice;
pub(crate) mod writer;

pub use invoice::build_invoice_xml;

/// Reporting profile identifier.
pub const PROFILE_ID: &str = "reporting:1.0";

/// UNTDID 1001 code written as the invoice type (simplified tax invoice).
pub const INVOICE_TYPE_CODE: &str = "388";

/// UNTDID 5305 standard-rate tax category.
pub const STANDARD_TAX_CATEGORY: &str = "S";

/// `AdditionalDocumentReference` ID carrying the invoice counter.
pub const ADDITIONAL_REF_COUNTER: &str = "ICV";

/// `AdditionalDocumentReference` ID carrying the previous invoice hash.
pub const ADDITIONAL_REF_PREVIOUS_HASH: &str = "PIH";

/// UBL 2.1 namespace URIs.
pub mod ubl_ns {
    pub const INVOICE: &str = "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2";
    pub const CAC: &str =
        "urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2";
    pub const CBC: &str = "urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2";
    pub const EXT: &str =
        "urn:oasis:names:specification:ubl:schema:xsd:CommonExtensionComponents-2";
}
