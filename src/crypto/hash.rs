use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

/// Previous-invoice hash of the first invoice in a chain: base64 of the hex
/// SHA-256 of `"0"`, the seed value compliance authorities expect.
pub const INITIAL_PREVIOUS_HASH: &str =
    "NWZlY2ViNjZmZmM4NmYzOGQ5NTI3ODZjNmQ2OTZjNzljMmRiYzIzOWRkNGU5MWI0NjcyOWQ3M2EyN2ZiNTdlOQ==";

/// Base64 SHA-256 digest of the UTF-8 bytes of a rendered invoice.
///
/// Pure function of its input: identical XML always yields an identical hash.
pub fn digest_invoice(xml: &str) -> String {
    STANDARD.encode(Sha256::digest(xml.as_bytes()))
}

/// Base64 SHA-256 digest of a DER-encoded certificate, for the QR certificate field.
pub fn certificate_hash(der: &[u8]) -> String {
    STANDARD.encode(Sha256::digest(der))
}
