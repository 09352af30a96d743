// labelink/labelink/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{fold_xor, frame_checksum};
pub use commands::*;
pub use frame::Frame;
pub use responses::*;
