// labelink/labelink/src/protocol/commands/settings.rs

use crate::types::{Density, LabelType};

/// Encode SetDensity command payload (command type 0x21)
pub fn encode_set_density(density: Density) -> Vec<u8> {
    vec![density.as_u8()]
}

/// Encode SetLabelType command payload (command type 0x23)
pub fn encode_set_label_type(label_type: LabelType) -> Vec<u8> {
    vec![label_type.as_u8()]
}
