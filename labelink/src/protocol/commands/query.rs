// labelink/labelink/src/protocol/commands/query.rs

use crate::types::InfoKey;

/// Encode GetPrintStatus command payload (command type 0xA3)
pub fn encode_get_print_status() -> Vec<u8> {
    vec![0x01]
}

/// Encode Heartbeat command payload (command type 0xDC)
pub fn encode_heartbeat() -> Vec<u8> {
    vec![0x01]
}

/// Encode GetInfo command payload (command type 0x40)
/// Layout: the queried key byte
pub fn encode_get_info(key: InfoKey) -> Vec<u8> {
    vec![key.as_u8()]
}

/// Encode GetRfid command payload (command type 0x1A)
pub fn encode_get_rfid() -> Vec<u8> {
    vec![0x01]
}
