// labelink/labelink/src/protocol/responses/rfid.rs

use crate::protocol::parser;
use crate::Result;

/// Decoded RFID tag record from the loaded label roll.
/// Layout: uuid(8) + barcode(len-prefixed) + serial(len-prefixed)
///         + total_len(be u16) + used_len(be u16) + kind(1)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RfidRecord {
    /// Tag UUID, rendered as lowercase hex
    pub uuid: String,
    /// Roll barcode
    pub barcode: String,
    /// Roll serial number
    pub serial: String,
    /// Total media length on the roll
    pub total_len: u16,
    /// Media length already consumed
    pub used_len: u16,
    /// Media kind byte
    pub kind: u8,
}

/// Decode a GetRfid response payload. A zero first byte means no tag is
/// present, which is an absent result, not an error.
pub fn decode_rfid(data: &[u8]) -> Result<Option<RfidRecord>> {
    if parser::byte_at(data, 0)? == 0 {
        return Ok(None);
    }

    let uuid = parser::to_hex(parser::slice_at(data, 0, 8)?);
    let (barcode, idx) = parser::prefixed_str_at(data, 8)?;
    let (serial, idx) = parser::prefixed_str_at(data, idx)?;
    let total_len = parser::be_u16_at(data, idx)?;
    let used_len = parser::be_u16_at(data, idx + 2)?;
    let kind = parser::byte_at(data, idx + 4)?;

    Ok(Some(RfidRecord {
        uuid,
        barcode,
        serial,
        total_len,
        used_len,
        kind,
    }))
}
