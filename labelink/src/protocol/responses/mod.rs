// labelink/labelink/src/protocol/responses/mod.rs
//
// This wire protocol carries no per-message correlation id, so response
// payloads cannot be dispatched by inspecting them; the caller knows which
// command it just issued and picks the matching decoder. Decoders therefore
// live here as standalone functions over the frame payload.

pub mod heartbeat;
pub mod info;
pub mod rfid;
pub mod status;

pub use heartbeat::{decode_heartbeat, HeartbeatReport};
pub use info::{decode_info, DeviceInfo};
pub use rfid::{decode_rfid, RfidRecord};
pub use status::{decode_print_status, StatusReport};
