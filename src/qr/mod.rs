//! QR payload: nine TLV records, concatenated in tag order and base64-encoded.
//!
//! | Tag | Field |
//! |-----|-------|
//! | 1 | Seller name |
//! | 2 | VAT registration number |
//! | 3 | Timestamp |
//! | 4 | Invoice total incl. VAT (2 decimals) |
//! | 5 | VAT amount (2 decimals) |
//! | 6 | Invoice hash |
//! | 7 | Signature |
//! | 8 | Public key |
//! | 9 | Certificate hash |
//!
//! Position is part of the wire contract: scanners walk the records from offset 0.

use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{FatooraError, format_amount};
use crate::tlv::{TlvRecord, decode_tlv, encode_tlv};

/// QR field tags.
pub mod tags {
    pub const SELLER_NAME: u8 = 1;
    pub const VAT_NUMBER: u8 = 2;
    pub const TIMESTAMP: u8 = 3;
    pub const TOTAL: u8 = 4;
    pub const VAT: u8 = 5;
    pub const HASH: u8 = 6;
    pub const SIGNATURE: u8 = 7;
    pub const PUBLIC_KEY: u8 = 8;
    pub const CERTIFICATE_HASH: u8 = 9;
}

/// Number of records in a complete payload.
pub const FIELD_COUNT: usize = 9;

/// The fixed field set carried by the QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrFields {
    pub seller_name: String,
    pub vat_number: String,
    pub timestamp: String,
    /// Grand total including VAT.
    pub total: Decimal,
    pub vat: Decimal,
    pub hash: String,
    pub signature: String,
    pub public_key: String,
    pub certificate_hash: String,
}

impl QrFields {
    /// Field texts in tag order 1..=9. Amounts are rendered with two decimals.
    pub fn to_texts(&self) -> [(u8, String); FIELD_COUNT] {
        [
            (tags::SELLER_NAME, self.seller_name.clone()),
            (tags::VAT_NUMBER, self.vat_number.clone()),
            (tags::TIMESTAMP, self.timestamp.clone()),
            (tags::TOTAL, format_amount(self.total)),
            (tags::VAT, format_amount(self.vat)),
            (tags::HASH, self.hash.clone()),
            (tags::SIGNATURE, self.signature.clone()),
            (tags::PUBLIC_KEY, self.public_key.clone()),
            (tags::CERTIFICATE_HASH, self.certificate_hash.clone()),
        ]
    }
}

/// Encode the nine fields as one base64 TLV buffer.
///
/// No field content is validated; a value longer than the TLV limit fails with
/// [`FatooraError::Encoding`] and no payload is produced.
pub fn build_qr_payload(fields: &QrFields) -> Result<String, FatooraError> {
    let mut buf = Vec::new();
    for (tag, text) in fields.to_texts() {
        buf.extend(encode_tlv(tag, text.as_bytes())?);
    }
    Ok(STANDARD.encode(buf))
}

/// Base64-decode a payload and walk its TLV records without interpreting them.
pub fn decode_qr_records(payload: &str) -> Result<Vec<TlvRecord>, FatooraError> {
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| FatooraError::Encoding(format!("QR payload is not valid base64: {e}")))?;
    decode_tlv(&bytes)
}

/// Decode a payload back into its nine fields.
///
/// The payload must hold exactly tags 1..=9, in order.
pub fn decode_qr_payload(payload: &str) -> Result<QrFields, FatooraError> {
    let records = decode_qr_records(payload)?;
    if records.len() != FIELD_COUNT {
        return Err(FatooraError::Encoding(format!(
            "QR payload has {} records, expected {FIELD_COUNT}",
            records.len()
        )));
    }

    let mut texts = Vec::with_capacity(FIELD_COUNT);
    for (i, record) in records.iter().enumerate() {
        let expected = (i + 1) as u8;
        if record.tag != expected {
            return Err(FatooraError::Encoding(format!(
                "QR record {i} has tag {}, expected {expected}",
                record.tag
            )));
        }
        texts.push(record.value_str()?.to_string());
    }

    let mut texts = texts.into_iter();
    let mut next = || texts.next().unwrap_or_default();

    Ok(QrFields {
        seller_name: next(),
        vat_number: next(),
        timestamp: next(),
        total: parse_amount(tags::TOTAL, &next())?,
        vat: parse_amount(tags::VAT, &next())?,
        hash: next(),
        signature: next(),
        public_key: next(),
        certificate_hash: next(),
    })
}

fn parse_amount(tag: u8, text: &str) -> Result<Decimal, FatooraError> {
    Decimal::from_str(text)
        .map_err(|e| FatooraError::Encoding(format!("tag {tag}: invalid amount {text:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fields() -> QrFields {
        QrFields {
            seller_name: "Acme".into(),
            vat_number: "3001234567".into(),
            timestamp: "2024-06-15T10:30:00Z".into(),
            total: dec!(28.75),
            vat: dec!(3.75),
            hash: "hash=".into(),
            signature: "3045".into(),
            public_key: "pk".into(),
            certificate_hash: "".into(),
        }
    }

    #[test]
    fn records_in_tag_order() {
        let payload = build_qr_payload(&fields()).unwrap();
        let records = decode_qr_records(&payload).unwrap();
        let tags: Vec<u8> = records.iter().map(|r| r.tag).collect();
        assert_eq!(tags, (1..=9).collect::<Vec<u8>>());
        assert_eq!(records[3].value_str().unwrap(), "28.75");
        assert_eq!(records[4].value_str().unwrap(), "3.75");
    }

    #[test]
    fn exact_bytes_for_leading_records() {
        let payload = build_qr_payload(&fields()).unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        assert_eq!(&bytes[..6], &[1, 4, b'A', b'c', b'm', b'e']);
        assert_eq!(&bytes[6..8], &[2, 10]);
        // total length is the sum of 2-byte headers and values
        let value_len: usize = fields().to_texts().iter().map(|(_, v)| v.len()).sum();
        assert_eq!(bytes.len(), value_len + 2 * FIELD_COUNT);
    }

    #[test]
    fn amounts_are_two_decimal_text() {
        let mut f = fields();
        f.total = dec!(287.5);
        f.vat = dec!(37.5);
        let records = decode_qr_records(&build_qr_payload(&f).unwrap()).unwrap();
        assert_eq!(records[3].value_str().unwrap(), "287.50");
        assert_eq!(records[4].value_str().unwrap(), "37.50");
    }

    #[test]
    fn decode_recovers_fields() {
        let f = fields();
        let decoded = decode_qr_payload(&build_qr_payload(&f).unwrap()).unwrap();
        assert_eq!(decoded, f);
    }

    #[test]
    fn long_field_uses_extended_length() {
        let mut f = fields();
        f.signature = "ab".repeat(200);
        let payload = build_qr_payload(&f).unwrap();
        let decoded = decode_qr_payload(&payload).unwrap();
        assert_eq!(decoded.signature.len(), 400);
    }

    #[test]
    fn oversized_field_is_an_encoding_error() {
        let mut f = fields();
        f.public_key = "x".repeat(70_000);
        assert!(matches!(
            build_qr_payload(&f),
            Err(FatooraError::Encoding(_))
        ));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(decode_qr_payload("not base64!").is_err());
        let short = STANDARD.encode(encode_tlv(1, b"Acme").unwrap());
        assert!(decode_qr_payload(&short).is_err());

        let mut swapped = Vec::new();
        for (tag, text) in fields().to_texts() {
            let tag = match tag {
                1 => 2,
                2 => 1,
                t => t,
            };
            swapped.extend(encode_tlv(tag, text.as_bytes()).unwrap());
        }
        assert!(decode_qr_payload(&STANDARD.encode(swapped)).is_err());
    }

    #[test]
    fn bilingual_seller_name() {
        let mut f = fields();
        f.seller_name = "شركة أكمي Acme".into();
        let decoded = decode_qr_payload(&build_qr_payload(&f).unwrap()).unwrap();
        assert_eq!(decoded.seller_name, "شركة أكمي Acme");
    }
}
