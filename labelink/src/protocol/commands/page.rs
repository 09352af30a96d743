// labelink/labelink/src/protocol/commands/page.rs

use crate::types::Quantity;

/// Encode SetDimensions command payload (command type 0x13)
/// Layout: height(be u16) + width(be u16), height first
pub fn encode_set_dimensions(width: u16, height: u16) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4);
    buf.extend_from_slice(&height.to_be_bytes());
    buf.extend_from_slice(&width.to_be_bytes());
    buf
}

/// Encode SetQuantity command payload (command type 0x15)
/// Layout: quantity(be u16)
pub fn encode_set_quantity(quantity: Quantity) -> Vec<u8> {
    quantity.as_u16().to_be_bytes().to_vec()
}
