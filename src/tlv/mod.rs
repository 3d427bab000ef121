//! Tag-length-value byte codec.
//!
//! Each record is `[tag, len] ++ value` when the value is at most 255 bytes, or
//! `[tag, 0xFF, len_hi, len_lo] ++ value` for longer values. Lengths beyond
//! `u16::MAX` are not representable and are rejected.

use crate::core::FatooraError;

/// Length byte that announces a two-byte big-endian length.
pub const EXTENDED_LENGTH_MARKER: u8 = 0xFF;

/// Longest value that fits in the one-byte length form.
pub const MAX_SHORT_LENGTH: usize = 255;

/// Longest value that can be encoded at all.
pub const MAX_VALUE_LENGTH: usize = u16::MAX as usize;

/// A decoded TLV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvRecord {
    pub tag: u8,
    pub value: Vec<u8>,
}

impl TlvRecord {
    pub fn new(tag: u8, value: impl Into<Vec<u8>>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    /// Encode this record into header + value bytes.
    pub fn encode(&self) -> Result<Vec<u8>, FatooraError> {
        encode_tlv(self.tag, &self.value)
    }

    /// Size of the encoded record, header included.
    pub fn encoded_len(&self) -> usize {
        header_len(self.value.len()) + self.value.len()
    }

    /// The value as UTF-8 text.
    pub fn value_str(&self) -> Result<&str, FatooraError> {
        std::str::from_utf8(&self.value).map_err(|e| {
            FatooraError::Encoding(format!("tag {} is not valid UTF-8: {e}", self.tag))
        })
    }
}

fn header_len(value_len: usize) -> usize {
    if value_len <= MAX_SHORT_LENGTH { 2 } else { 4 }
}

/// Encode a single TLV record.
pub fn encode_tlv(tag: u8, value: &[u8]) -> Result<Vec<u8>, FatooraError> {
    let len = value.len();
    if len > MAX_VALUE_LENGTH {
        return Err(FatooraError::Encoding(format!(
            "tag {tag}: value of {len} bytes exceeds the {MAX_VALUE_LENGTH}-byte TLV limit"
        )));
    }

    let mut out = Vec::with_capacity(header_len(len) + len);
    out.push(tag);
    if len <= MAX_SHORT_LENGTH {
        out.push(len as u8);
    } else {
        out.push(EXTENDED_LENGTH_MARKER);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    }
    out.extend_from_slice(value);
    Ok(out)
}

/// Walk sequential TLV records from offset 0 until the buffer is exhausted.
pub fn decode_tlv(bytes: &[u8]) -> Result<Vec<TlvRecord>, FatooraError> {
    let mut records = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let tag = bytes[pos];
        let len_byte = *bytes
            .get(pos + 1)
            .ok_or_else(|| truncated(tag, pos, "length"))?;
        pos += 2;

        let len = if len_byte == EXTENDED_LENGTH_MARKER {
            let ext = bytes
                .get(pos..pos + 2)
                .ok_or_else(|| truncated(tag, pos, "extended length"))?;
            pos += 2;
            u16::from_be_bytes([ext[0], ext[1]]) as usize
        } else {
            len_byte as usize
        };

        let value = bytes
            .get(pos..pos + len)
            .ok_or_else(|| truncated(tag, pos, "value"))?;
        pos += len;

        records.push(TlvRecord::new(tag, value));
    }

    Ok(records)
}

fn truncated(tag: u8, offset: usize, part: &str) -> FatooraError {
    FatooraError::Encoding(format!(
        "truncated TLV record (tag {tag}): missing {part} at offset {offset}"
    ))
}
