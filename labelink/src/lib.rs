// labelink/labelink/src/lib.rs

//! labelink
//!
//! Protocol engine for Bluetooth thermal label printers speaking the
//! 0x55 0x55 row-bitmap framing: frame codec, image encoder, serialized
//! write queue, FIFO response correlation and the print-job state machine.
//! Transports are injected; the engine only needs a connected byte stream.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod link;
pub mod prelude;
pub mod printer;
pub mod protocol;
pub mod raster;
pub mod test_support;
pub mod transport;
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
