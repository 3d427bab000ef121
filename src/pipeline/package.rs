use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{FatooraError, Invoice, calculate_totals, validate_invoice, validation_failure};
use crate::crypto::{PrivateKey, certificate_hash, digest_invoice};
use crate::qr::{QrFields, build_qr_payload};
use crate::ubl::build_invoice_xml;

/// The finished, internally consistent artifact bundle for one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicePackage {
    /// Canonical invoice XML, for storage and submission.
    pub xml: String,
    /// Base64 SHA-256 of `xml`; becomes the next invoice's previous hash.
    pub hash: String,
    /// Hex DER ECDSA signature over `hash`.
    pub signature: String,
    /// Base64 TLV payload for the printed QR code.
    pub qr: String,
}

/// Per-call overrides for the QR public key and certificate hash fields.
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    public_key: Option<String>,
    certificate_hash: Option<String>,
}

impl PackageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this text for the QR public key field instead of the derived key.
    pub fn public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    pub fn certificate_hash(mut self, hash: impl Into<String>) -> Self {
        self.certificate_hash = Some(hash.into());
        self
    }

    /// Derive the certificate hash field from a DER-encoded certificate.
    pub fn certificate(self, der: &[u8]) -> Self {
        self.certificate_hash(certificate_hash(der))
    }
}

/// Run the full pipeline with default options.
///
/// The key is parsed before anything else, so a malformed key aborts before any
/// hash or signature exists.
pub fn create_invoice_package(
    invoice: &Invoice,
    private_key: &str,
) -> Result<InvoicePackage, FatooraError> {
    let key = PrivateKey::parse(private_key)?;
    create_invoice_package_with(invoice, &key, &PackageOptions::default())
}

/// Validate, render, hash, sign and encode an invoice.
///
/// Any failure aborts the whole run; there is no partial package.
#[tracing::instrument(skip_all, fields(invoice = %invoice.number, uuid = %invoice.uuid))]
pub fn create_invoice_package_with(
    invoice: &Invoice,
    private_key: &PrivateKey,
    options: &PackageOptions,
) -> Result<InvoicePackage, FatooraError> {
    let errors = validate_invoice(invoice);
    if !errors.is_empty() {
        debug!(count = errors.len(), "invoice rejected by validation");
        return Err(validation_failure(&errors));
    }

    let xml = build_invoice_xml(invoice)?;
    let hash = digest_invoice(&xml);
    let signature = private_key.sign(&hash);
    let totals = calculate_totals(&invoice.items);

    let public_key = match &options.public_key {
        Some(pk) => pk.clone(),
        None => private_key.public_key().to_base64_der()?,
    };

    let qr = build_qr_payload(&QrFields {
        seller_name: invoice.seller_name.clone(),
        vat_number: invoice.vat_number.clone(),
        timestamp: invoice.timestamp.clone(),
        total: totals.total,
        vat: totals.vat,
        hash: hash.clone(),
        signature: signature.clone(),
        public_key,
        certificate_hash: options.certificate_hash.clone().unwrap_or_default(),
    })?;

    info!(hash = %hash, xml_bytes = xml.len(), "invoice package created");

    Ok(InvoicePackage {
        xml,
        hash,
        signature,
        qr,
    })
}
