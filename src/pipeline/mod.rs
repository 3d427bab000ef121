//! Invoice pipeline orchestration and hash chaining.
//!
//! [`create_invoice_package`] runs, in strict order: XML rendering, hashing,
//! signing, totals, and QR encoding. Each call is stateless; distinct invoices
//! may be processed in parallel. Chaining is a data dependency, handled by
//! [`InvoiceChain`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fatoora::core::*;
//! use fatoora::pipeline::create_invoice_package;
//! use rust_decimal_macros::dec;
//!
//! let issued = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
//! let invoice = InvoiceBuilder::new("INV-0001", "3cf5ee18-ee25-44ea-a444-2c37ba7f28be", issued)
//!     .seller("Acme", "3001234567")
//!     .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
//!     .build()
//!     .unwrap();
//!
//! let key = "9c96dbe9a5a80482d598ad0090e4183927093b0267a9e2873f6405e48e3308f0";
//! let package = create_invoice_package(&invoice, key).unwrap();
//! assert_eq!(package.hash.len(), 44);
//! ```

mod chain;
mod package;

pub use chain::{ChainLink, InvoiceChain, verify_chain};
pub use package::{InvoicePackage, PackageOptions, create_invoice_package, create_invoice_package_with};
