// labelink/labelink/src/link/writer.rs

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::sleep;

use crate::constants::{MAX_WRITE_ATTEMPTS, WRITE_BACKOFF_STEP, WRITE_SETTLE_DELAY};
use crate::transport::Transport;
use crate::{Error, Result};

/// One outbound frame, owned by the worker from enqueue to completion.
pub(crate) struct QueuedWrite {
    bytes: Vec<u8>,
    expects_response: bool,
    done: oneshot::Sender<Result<()>>,
}

/// Handle to the single-worker write queue. Exactly one write is in flight
/// at any time; enqueued items complete in FIFO order.
pub(crate) struct WriteQueue {
    tx: mpsc::UnboundedSender<QueuedWrite>,
}

impl WriteQueue {
    /// Spawn the worker task draining writes onto the transport.
    pub(crate) fn spawn(
        transport: Arc<dyn Transport>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(transport, rx, shutdown));
        Self { tx }
    }

    /// Queue bytes for transmission. The returned receiver yields once the
    /// write has fully succeeded or exhausted its attempts.
    pub(crate) fn enqueue(
        &self,
        bytes: Vec<u8>,
        expects_response: bool,
    ) -> Result<oneshot::Receiver<Result<()>>> {
        let (done, rx) = oneshot::channel();
        let item = QueuedWrite {
            bytes,
            expects_response,
            done,
        };
        self.tx.send(item).map_err(|_| Error::Disconnected)?;
        Ok(rx)
    }
}

async fn run_worker(
    transport: Arc<dyn Transport>,
    mut rx: mpsc::UnboundedReceiver<QueuedWrite>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        let item = tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            item = rx.recv() => match item {
                Some(item) => item,
                None => return,
            },
        };

        let QueuedWrite {
            bytes,
            expects_response,
            done,
        } = item;
        let process = async {
            let result = attempt_write(&*transport, &bytes).await;
            if result.is_ok() && expects_response {
                // Give the printer's transport buffer room to turn around
                // before the next command lands on it.
                sleep(WRITE_SETTLE_DELAY).await;
            }
            result
        };
        tokio::pin!(process);

        tokio::select! {
            biased;
            _ = shutdown.changed() => {
                let _ = done.send(Err(Error::Disconnected));
                break;
            }
            result = &mut process => {
                let _ = done.send(result);
            }
        }
    }

    // Shutdown: fail everything still queued, immediately.
    rx.close();
    while let Ok(item) = rx.try_recv() {
        let _ = item.done.send(Err(Error::Disconnected));
    }
    debug!("write queue drained on shutdown");
}

/// Try a single write up to MAX_WRITE_ATTEMPTS times with linear-growth
/// backoff between attempts.
async fn attempt_write(transport: &dyn Transport, bytes: &[u8]) -> Result<()> {
    let mut last_err = Error::Transport("no write attempted".into());
    for attempt in 1..=MAX_WRITE_ATTEMPTS {
        match transport.write(bytes).await {
            Ok(()) => return Ok(()),
            Err(err) => {
                warn!(
                    "write attempt {}/{} failed: {}",
                    attempt, MAX_WRITE_ATTEMPTS, err
                );
                last_err = err;
                if attempt < MAX_WRITE_ATTEMPTS {
                    sleep(WRITE_BACKOFF_STEP * attempt).await;
                }
            }
        }
    }
    Err(last_err)
}
