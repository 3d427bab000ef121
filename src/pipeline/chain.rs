use tracing::{debug, info};

use super::package::{InvoicePackage, PackageOptions, create_invoice_package_with};
use crate::core::{FatooraError, Invoice, calculate_totals, format_amount};
use crate::crypto::{INITIAL_PREVIOUS_HASH, PrivateKey, PublicKey, digest_invoice};
use crate::qr::decode_qr_payload;
use crate::ubl::build_invoice_xml;

/// Tamper-evident invoice sequence for one issuing device.
///
/// Each issued invoice carries the hash of its predecessor and the next counter
/// value. Issuance takes `&mut self`, so one invoice is complete (hash known)
/// before the next one reads it. The state only advances when the pipeline
/// succeeds, so a failed invoice leaves no gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceChain {
    previous_hash: String,
    next_counter: u64,
}

impl Default for InvoiceChain {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceChain {
    /// Start a new chain at counter 1, seeded with [`INITIAL_PREVIOUS_HASH`].
    pub fn new() -> Self {
        Self {
            previous_hash: INITIAL_PREVIOUS_HASH.to_string(),
            next_counter: 1,
        }
    }

    /// Continue a persisted chain from the last stored hash.
    pub fn resume(previous_hash: impl Into<String>, next_counter: u64) -> Self {
        Self {
            previous_hash: previous_hash.into(),
            next_counter,
        }
    }

    /// Hash the next issued invoice will reference.
    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    /// Counter the next issued invoice will carry.
    pub fn next_counter(&self) -> u64 {
        self.next_counter
    }

    /// Stamp the invoice with the chain state, run the pipeline, and advance.
    ///
    /// Returns the stamped invoice (to be persisted alongside its package).
    pub fn issue(
        &mut self,
        mut invoice: Invoice,
        private_key: &PrivateKey,
        options: &PackageOptions,
    ) -> Result<(Invoice, InvoicePackage), FatooraError> {
        invoice.previous_invoice_hash = Some(self.previous_hash.clone());
        invoice.counter = Some(self.next_counter);

        let package = create_invoice_package_with(&invoice, private_key, options)?;

        info!(
            invoice = %invoice.number,
            counter = self.next_counter,
            hash = %package.hash,
            "invoice appended to chain"
        );
        self.previous_hash = package.hash.clone();
        self.next_counter += 1;

        Ok((invoice, package))
    }
}

/// One persisted invoice with the package produced for it.
#[derive(Debug, Clone, Copy)]
pub struct ChainLink<'a> {
    pub invoice: &'a Invoice,
    pub package: &'a InvoicePackage,
}

/// Check a run of persisted invoices for tampering.
///
/// For each link:
/// - the XML is rebuilt from the invoice and must match the stored XML;
/// - the stored hash must be the digest of that XML;
/// - the stored signature must verify over the hash with `public_key`;
/// - the QR payload must decode and carry the invoice's seller, VAT number,
///   timestamp and recomputed totals, plus the package's hash and signature;
/// - every invoice after the first must reference its predecessor's hash.
///
/// Reports the first break.
pub fn verify_chain(links: &[ChainLink<'_>], public_key: &PublicKey) -> Result<(), FatooraError> {
    let mut previous: Option<&str> = None;

    for (i, link) in links.iter().enumerate() {
        let number = &link.invoice.number;
        let broken = |what: String| FatooraError::Chain(format!("link {i} ({number}): {what}"));

        let xml = build_invoice_xml(link.invoice)?;
        if xml != link.package.xml {
            return Err(broken("stored XML does not match invoice content".into()));
        }

        if digest_invoice(&xml) != link.package.hash {
            return Err(broken("stored hash does not match XML digest".into()));
        }

        public_key
            .verify(&link.package.hash, &link.package.signature)
            .map_err(|e| broken(format!("stored signature rejected: {e}")))?;

        verify_qr(link.invoice, link.package).map_err(broken)?;

        if let Some(expected) = previous {
            match link.invoice.previous_invoice_hash.as_deref() {
                Some(actual) if actual == expected => {}
                Some(actual) => {
                    return Err(broken(format!(
                        "previous hash {actual} does not match predecessor hash {expected}"
                    )));
                }
                None => return Err(broken("missing previous invoice hash".into())),
            }
        }

        previous = Some(link.package.hash.as_str());
    }

    debug!(links = links.len(), "hash chain verified");
    Ok(())
}

fn verify_qr(invoice: &Invoice, package: &InvoicePackage) -> Result<(), String> {
    let fields =
        decode_qr_payload(&package.qr).map_err(|e| format!("stored QR does not decode: {e}"))?;
    let totals = calculate_totals(&invoice.items);

    let checks = [
        ("seller name", fields.seller_name == invoice.seller_name),
        ("VAT number", fields.vat_number == invoice.vat_number),
        ("timestamp", fields.timestamp == invoice.timestamp),
        ("total", format_amount(fields.total) == format_amount(totals.total)),
        ("VAT amount", format_amount(fields.vat) == format_amount(totals.vat)),
        ("hash", fields.hash == package.hash),
        ("signature", fields.signature == package.signature),
    ];
    match checks.iter().find(|(_, ok)| !ok) {
        Some((field, _)) => Err(format!("stored QR {field} does not match the invoice")),
        None => Ok(()),
    }
}
