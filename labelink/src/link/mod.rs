// labelink/labelink/src/link/mod.rs

//! The connection layer tying transport, write queue and correlator
//! together. One `Link` per transport connection; a disconnect invalidates
//! every in-flight write and pending request, and the caller must build a
//! fresh `Link` on a fresh connection to continue.

mod correlator;
mod writer;

pub use correlator::RequestId;

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::watch;

use crate::transport::Transport;
use crate::Result;

use correlator::Correlator;
use writer::WriteQueue;

/// A live protocol session over one transport connection.
pub struct Link {
    transport: Arc<dyn Transport>,
    writer: WriteQueue,
    correlator: Arc<Correlator>,
    shutdown: watch::Sender<bool>,
}

impl Link {
    /// Open a session: subscribe to inbound notifications, spawn the write
    /// worker and the inbound pump.
    pub async fn open(transport: Arc<dyn Transport>) -> Result<Self> {
        let mut inbound = transport.subscribe_inbound().await?;
        let (shutdown, shutdown_rx) = watch::channel(false);
        let writer = WriteQueue::spawn(Arc::clone(&transport), shutdown_rx.clone());
        let correlator = Arc::new(Correlator::new());

        // Inbound pump: decouples transport notification timing from
        // protocol logic. The channel closing means the transport is gone,
        // which tears down all pending state.
        let pump_correlator = Arc::clone(&correlator);
        let mut pump_shutdown = shutdown_rx;
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = pump_shutdown.changed() => break,
                    chunk = inbound.recv() => match chunk {
                        Some(chunk) => pump_correlator.on_inbound(chunk),
                        None => break,
                    },
                }
            }
            debug!("inbound pump stopped");
            pump_correlator.fail_all();
        });

        Ok(Self {
            transport,
            writer,
            correlator,
            shutdown,
        })
    }

    /// Send a frame and await its correlated response. Registration happens
    /// before the write is enqueued, so a response beating the caller to
    /// the await still lands in the right slot. `Ok(None)` means the
    /// printer never answered within `timeout`.
    pub async fn request(&self, wire: Vec<u8>, timeout: Duration) -> Result<Option<Vec<u8>>> {
        let (id, rx) = self.correlator.register()?;
        let done = match self.writer.enqueue(wire, true) {
            Ok(done) => done,
            Err(err) => {
                self.correlator.cancel(id);
                return Err(err);
            }
        };
        match done.await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                self.correlator.cancel(id);
                return Err(err);
            }
            Err(_) => {
                self.correlator.cancel(id);
                return Err(crate::Error::Disconnected);
            }
        }
        self.correlator.wait(id, rx, timeout).await
    }

    /// Send a frame that expects no response (image rows). Resolves when
    /// the write has been accepted by the transport.
    pub async fn send(&self, wire: Vec<u8>) -> Result<()> {
        let done = self.writer.enqueue(wire, false)?;
        match done.await {
            Ok(result) => result,
            Err(_) => Err(crate::Error::Disconnected),
        }
    }

    /// Tear down all in-flight state. Idempotent; safe to call from the
    /// "transport is gone" path as well as an orderly disconnect.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
        self.correlator.fail_all();
    }

    /// Orderly teardown: invalidate in-flight state, then close the
    /// underlying transport.
    pub async fn disconnect(&self) -> Result<()> {
        self.shutdown();
        self.transport.disconnect().await
    }
}

impl Drop for Link {
    fn drop(&mut self) {
        self.shutdown();
    }
}
