// labelink/labelink/src/protocol/responses/info.rs

use crate::protocol::parser;
use crate::types::InfoKey;
use crate::Result;

/// Decoded GetInfo response, shaped by the queried key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceInfo {
    /// Serial number, rendered as lowercase hex
    Serial(String),
    /// Software/hardware version, fixed-point hundredths
    Version(f32),
    /// Any other key: a raw integer value
    Value(u32),
}

/// Decode a GetInfo response payload for the key that was queried.
pub fn decode_info(key: InfoKey, data: &[u8]) -> Result<DeviceInfo> {
    match key {
        InfoKey::Serial => {
            parser::ensure_len(data, 1)?;
            Ok(DeviceInfo::Serial(parser::to_hex(data)))
        }
        InfoKey::SoftwareVersion | InfoKey::HardwareVersion => {
            let raw = parser::be_uint(data)?;
            Ok(DeviceInfo::Version(raw as f32 / 100.0))
        }
        _ => Ok(DeviceInfo::Value(parser::be_uint(data)?)),
    }
}
