// labelink/labelink/src/protocol/responses/heartbeat.rs

use crate::protocol::parser;
use crate::Result;

/// Decoded Heartbeat response.
///
/// Firmware variants answer the same heartbeat command with different
/// payload shapes; the payload length is the only discriminator on the
/// wire. The offsets below are the layouts observed per length; a length
/// not in the table decodes to all-absent fields rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartbeatReport {
    /// Lid/cover state, if this firmware reports it
    pub closing_state: Option<u8>,
    /// Battery charge level, if reported
    pub power_level: Option<u8>,
    /// Paper feed state, if reported
    pub paper_state: Option<u8>,
    /// RFID reader state, if reported
    pub rfid_read_state: Option<u8>,
}

/// Decode a Heartbeat response payload by length-sniffing.
pub fn decode_heartbeat(data: &[u8]) -> Result<HeartbeatReport> {
    let mut report = HeartbeatReport::default();
    match data.len() {
        9 => {
            report.closing_state = Some(parser::byte_at(data, 8)?);
        }
        10 => {
            report.closing_state = Some(parser::byte_at(data, 8)?);
            report.power_level = Some(parser::byte_at(data, 9)?);
        }
        13 => {
            report.closing_state = Some(parser::byte_at(data, 9)?);
            report.power_level = Some(parser::byte_at(data, 10)?);
            report.paper_state = Some(parser::byte_at(data, 11)?);
            report.rfid_read_state = Some(parser::byte_at(data, 12)?);
        }
        19 => {
            report.closing_state = Some(parser::byte_at(data, 15)?);
            report.power_level = Some(parser::byte_at(data, 16)?);
            report.paper_state = Some(parser::byte_at(data, 17)?);
            report.rfid_read_state = Some(parser::byte_at(data, 18)?);
        }
        20 => {
            report.closing_state = Some(parser::byte_at(data, 9)?);
            report.power_level = Some(parser::byte_at(data, 10)?);
            report.paper_state = Some(parser::byte_at(data, 18)?);
            report.rfid_read_state = Some(parser::byte_at(data, 19)?);
        }
        _ => {}
    }
    Ok(report)
}
