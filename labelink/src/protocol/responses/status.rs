// labelink/labelink/src/protocol/responses/status.rs

use crate::protocol::parser;
use crate::Result;

/// Decoded GetPrintStatus response.
/// Layout: page(be u16) + progress1(1) + progress2(1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusReport {
    /// Pages finished so far in the current job
    pub page: u16,
    /// Feed progress percentage
    pub progress1: u8,
    /// Thermal head progress percentage
    pub progress2: u8,
}

impl StatusReport {
    /// Combined progress: the lesser of the two progress channels, so a
    /// page only counts as done when both have caught up.
    pub fn progress(&self) -> u8 {
        self.progress1.min(self.progress2)
    }
}

/// Decode a GetPrintStatus response payload.
pub fn decode_print_status(data: &[u8]) -> Result<StatusReport> {
    parser::ensure_len(data, 4)?;
    Ok(StatusReport {
        page: parser::be_u16_at(data, 0)?,
        progress1: parser::byte_at(data, 2)?,
        progress2: parser::byte_at(data, 3)?,
    })
}
