// labelink/labelink/src/link/correlator.rs

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::oneshot;

use crate::{Error, Result};

/// Connection-scoped request identifier, issued monotonically by the
/// correlator that owns the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

struct Pending {
    id: RequestId,
    tx: oneshot::Sender<Vec<u8>>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    pending: VecDeque<Pending>,
    closed: bool,
}

/// Matches inbound frames to outstanding requests in FIFO order.
///
/// This wire protocol carries no correlation id, so the oldest pending
/// request is resolved by whatever arrives next; soundness rests on the
/// write queue keeping at most one request-bearing write in flight. That
/// is a structural protocol limitation, not a policy this type could relax.
#[derive(Default)]
pub(crate) struct Correlator {
    inner: Mutex<Inner>,
}

impl Correlator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create a pending request slot. Must be called before the matching
    /// write is enqueued, so a fast printer response cannot arrive with
    /// nobody registered to take it.
    pub(crate) fn register(&self) -> Result<(RequestId, oneshot::Receiver<Vec<u8>>)> {
        let mut inner = self.inner.lock().unwrap();
        if inner.closed {
            return Err(Error::Disconnected);
        }
        let id = RequestId(inner.next_id);
        inner.next_id += 1;
        let (tx, rx) = oneshot::channel();
        inner.pending.push_back(Pending { id, tx });
        Ok((id, rx))
    }

    /// Resolve the oldest pending request with the raw inbound bytes.
    /// Frames arriving with nothing pending are dropped.
    pub(crate) fn on_inbound(&self, bytes: Vec<u8>) {
        let slot = self.inner.lock().unwrap().pending.pop_front();
        match slot {
            Some(pending) => {
                if pending.tx.send(bytes).is_err() {
                    debug!("request {:?} abandoned before its response arrived", pending.id);
                }
            }
            None => {
                warn!("dropping unsolicited frame of {} bytes", bytes.len());
            }
        }
    }

    /// Remove a pending request that will never be awaited (write failure,
    /// await timeout). Keeps arrival order intact for the remainder.
    pub(crate) fn cancel(&self, id: RequestId) {
        let mut inner = self.inner.lock().unwrap();
        inner.pending.retain(|p| p.id != id);
    }

    /// Await the response for a registered request. `Ok(None)` on timeout,
    /// which several commands legitimately produce; `Err(Disconnected)`
    /// if the connection was torn down while waiting.
    pub(crate) async fn wait(
        &self,
        id: RequestId,
        rx: oneshot::Receiver<Vec<u8>>,
        timeout: Duration,
    ) -> Result<Option<Vec<u8>>> {
        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(bytes)) => Ok(Some(bytes)),
            Ok(Err(_)) => Err(Error::Disconnected),
            Err(_) => {
                self.cancel(id);
                Ok(None)
            }
        }
    }

    /// Fail every pending request and refuse all future registrations.
    /// Dropping the result slots wakes every waiter with `Disconnected`.
    pub(crate) fn fail_all(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.closed = true;
        inner.pending.clear();
    }

    #[cfg(test)]
    pub(crate) fn pending_len(&self) -> usize {
        self.inner.lock().unwrap().pending.len()
    }
}
