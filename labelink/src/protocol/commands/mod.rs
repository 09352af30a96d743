// labelink/labelink/src/protocol/commands/mod.rs

pub mod page;
pub mod query;
pub mod session;
pub mod settings;

pub use page::{encode_set_dimensions, encode_set_quantity};
pub use query::{encode_get_info, encode_get_print_status, encode_get_rfid, encode_heartbeat};
pub use session::{
    encode_end_page_print, encode_end_print, encode_start_page_print, encode_start_print,
};
pub use settings::{encode_set_density, encode_set_label_type};

use crate::constants;
use crate::protocol::Frame;
use crate::types::{Density, InfoKey, LabelType, Quantity};
use crate::Result;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<family>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetDensity(Density),
    SetLabelType(LabelType),
    StartPrint,
    EndPrint,
    StartPagePrint,
    EndPagePrint,
    SetDimensions { width: u16, height: u16 },
    SetQuantity(Quantity),
    GetPrintStatus,
    Heartbeat,
    GetInfo(InfoKey),
    GetRfid,
}

impl Command {
    /// Return the command type byte placed in the wire frame.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::SetDensity(_) => constants::CMD_SET_DENSITY,
            Self::SetLabelType(_) => constants::CMD_SET_LABEL_TYPE,
            Self::StartPrint => constants::CMD_START_PRINT,
            Self::EndPrint => constants::CMD_END_PRINT,
            Self::StartPagePrint => constants::CMD_START_PAGE_PRINT,
            Self::EndPagePrint => constants::CMD_END_PAGE_PRINT,
            Self::SetDimensions { .. } => constants::CMD_SET_DIMENSIONS,
            Self::SetQuantity(_) => constants::CMD_SET_QUANTITY,
            Self::GetPrintStatus => constants::CMD_GET_PRINT_STATUS,
            Self::Heartbeat => constants::CMD_HEARTBEAT,
            Self::GetInfo(_) => constants::CMD_GET_INFO,
            Self::GetRfid => constants::CMD_GET_RFID,
        }
    }

    /// Encode the command into its raw frame payload.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SetDensity(density) => encode_set_density(*density),
            Self::SetLabelType(label_type) => encode_set_label_type(*label_type),
            Self::StartPrint => encode_start_print(),
            Self::EndPrint => encode_end_print(),
            Self::StartPagePrint => encode_start_page_print(),
            Self::EndPagePrint => encode_end_page_print(),
            Self::SetDimensions { width, height } => encode_set_dimensions(*width, *height),
            Self::SetQuantity(quantity) => encode_set_quantity(*quantity),
            Self::GetPrintStatus => encode_get_print_status(),
            Self::Heartbeat => encode_heartbeat(),
            Self::GetInfo(key) => encode_get_info(*key),
            Self::GetRfid => encode_get_rfid(),
        }
    }

    /// Encode the command into a full wire frame.
    pub fn to_wire(&self) -> Result<Vec<u8>> {
        Frame::encode(self.command_code(), &self.encode())
    }
}
