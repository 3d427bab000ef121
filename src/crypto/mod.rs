//! Invoice hashing and signing.
//!
//! - **Hash**: SHA-256 over the UTF-8 bytes of the rendered XML, base64-encoded.
//! - **Signature**: ECDSA over secp256k1 (SHA-256 message digest, RFC 6979 nonces)
//!   of the hash text, DER-encoded and hex-encoded.
//!
//! Keys are always passed in per call; nothing here keeps cryptographic state.
//!
//! # Example
//!
//! ```
//! use fatoora::crypto::{PrivateKey, digest_invoice};
//!
//! let key = PrivateKey::parse("9c96dbe9a5a80482d598ad0090e4183927093b0267a9e2873f6405e48e3308f0").unwrap();
//! let hash = digest_invoice("<Invoice/>");
//! let signature = key.sign(&hash);
//! assert!(key.public_key().verify(&hash, &signature).is_ok());
//! ```

mod hash;
mod signer;

pub use hash::{INITIAL_PREVIOUS_HASH, certificate_hash, digest_invoice};
pub use signer::{PrivateKey, PublicKey, sign_hash, verify_signature};
