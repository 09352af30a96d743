// labelink/labelink/src/transport/traits.rs

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::Result;

/// Transport trait abstracts the byte-stream link away from protocol logic.
///
/// The engine does not manage discovery, pairing or connection setup; it is
/// handed an already-connected transport and only needs these three
/// capabilities. Concrete implementations (BLE characteristic writes, a
/// classic Bluetooth socket) are selected at construction by the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send raw bytes to the printer.
    async fn write(&self, bytes: &[u8]) -> Result<()>;

    /// Obtain the inbound notification stream. Each received chunk is one
    /// raw frame as delivered by the radio. Called once per connection;
    /// the channel closing signals that the transport is gone.
    async fn subscribe_inbound(&self) -> Result<mpsc::Receiver<Vec<u8>>>;

    /// Tear the connection down. All in-flight engine state is invalidated.
    async fn disconnect(&self) -> Result<()>;
}
