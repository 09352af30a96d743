// labelink/labelink/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::ShortResponse {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_be_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a length-prefixed byte string at `idx`: one length byte followed by
/// that many data bytes. Returns the string and the index just past it.
pub fn prefixed_str_at(data: &[u8], idx: usize) -> Result<(String, usize)> {
    let len = byte_at(data, idx)? as usize;
    let bytes = slice_at(data, idx + 1, len)?;
    let s = std::str::from_utf8(bytes)
        .map_err(|_| Error::ResponseFormat("non-UTF8 string field".into()))?;
    Ok((s.to_string(), idx + 1 + len))
}

/// Fold 1..=4 big-endian bytes into a u32.
pub fn be_uint(data: &[u8]) -> Result<u32> {
    if data.is_empty() {
        return Err(Error::ShortResponse {
            expected: 1,
            actual: 0,
        });
    }
    if data.len() > 4 {
        return Err(Error::ResponseFormat(format!(
            "integer field too wide: {} bytes",
            data.len()
        )));
    }
    Ok(data.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
}

/// Lowercase hex rendering of a byte slice.
pub fn to_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for b in data {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
