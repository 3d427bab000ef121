//! # fatoora
//!
//! E-invoice compliance pipeline for ZATCA-style fiscal invoicing: renders a
//! sale into canonical UBL XML, hashes it, signs the hash, and encodes the
//! TLV payload printed as the invoice QR code. Each invoice's hash chains to
//! the previous one.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fatoora::core::*;
//! use fatoora::pipeline::create_invoice_package;
//! use fatoora::qr::decode_qr_payload;
//! use rust_decimal_macros::dec;
//!
//! let issued = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
//! let invoice = InvoiceBuilder::new("INV-0001", "3cf5ee18-ee25-44ea-a444-2c37ba7f28be", issued)
//!     .seller("Acme", "3001234567")
//!     .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
//!     .build()
//!     .unwrap();
//!
//! let totals = calculate_totals(&invoice.items);
//! assert_eq!(totals.total, dec!(28.75));
//!
//! let key = "9c96dbe9a5a80482d598ad0090e4183927093b0267a9e2873f6405e48e3308f0";
//! let package = create_invoice_package(&invoice, key).unwrap();
//! assert_eq!(decode_qr_payload(&package.qr).unwrap().total, dec!(28.75));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Invoice types, totals, validation, TLV codec |
//! | `ubl` | Canonical invoice XML |
//! | `crypto` | SHA-256 invoice hash, secp256k1 signing |
//! | `qr` | QR TLV payload encode/decode |
//! | `pipeline` (default) | Orchestrator and hash chain |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod tlv;

#[cfg(feature = "ubl")]
pub mod ubl;

#[cfg(feature = "crypto")]
pub mod crypto;

#[cfg(feature = "qr")]
pub mod qr;

#[cfg(feature = "pipeline")]
pub mod pipeline;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
