// labelink/labelink/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::constants::CMD_IMAGE_ROW;
use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Scripted reply the mock produces for the next command frame it sees.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// A non-zero acknowledgement frame (response type = command type + 1)
    Ack,
    /// A zero-byte refusal frame
    Refuse,
    /// Exact raw bytes to deliver
    Frame(Vec<u8>),
    /// No reply at all, letting the request time out
    Silent,
}

#[derive(Default)]
struct MockState {
    writes: Mutex<Vec<Vec<u8>>>,
    replies: Mutex<VecDeque<MockReply>>,
    inbound: Mutex<Option<mpsc::Sender<Vec<u8>>>>,
    write_attempts: AtomicU32,
    fail_next_writes: AtomicU32,
    fail_all_writes: AtomicBool,
    disconnected: AtomicBool,
}

/// Mock transport for unit tests. It records written frames, injects write
/// failures on demand, and answers command frames from a scripted reply
/// queue; image-row frames are swallowed like the real printer does.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<MockState>,
}

impl MockTransport {
    /// A mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a scripted reply for the next unanswered command frame.
    pub fn push_reply(&self, reply: MockReply) {
        self.state.replies.lock().unwrap().push_back(reply);
    }

    /// Queue `n` acknowledgements.
    pub fn push_acks(&self, n: usize) {
        for _ in 0..n {
            self.push_reply(MockReply::Ack);
        }
    }

    /// Fail the next `n` write calls with a transport error.
    pub fn fail_next_writes(&self, n: u32) {
        self.state.fail_next_writes.store(n, Ordering::SeqCst);
    }

    /// Fail every write call from now on.
    pub fn fail_all_writes(&self) {
        self.state.fail_all_writes.store(true, Ordering::SeqCst);
    }

    /// Frames successfully written, in order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.state.writes.lock().unwrap().clone()
    }

    /// Command type bytes of successfully written frames, in order.
    pub fn written_types(&self) -> Vec<u8> {
        self.writes().iter().filter_map(|w| w.get(2).copied()).collect()
    }

    /// Total write calls, including failed attempts.
    pub fn write_attempts(&self) -> u32 {
        self.state.write_attempts.load(Ordering::SeqCst)
    }

    /// Deliver raw bytes on the inbound channel, bypassing the script.
    pub async fn push_inbound(&self, bytes: Vec<u8>) -> Result<()> {
        let tx = {
            let guard = self.state.inbound.lock().unwrap();
            guard.clone()
        };
        let tx = tx.ok_or_else(|| Error::Transport("inbound not subscribed".into()))?;
        tx.send(bytes)
            .await
            .map_err(|_| Error::Transport("inbound channel closed".into()))
    }

    fn scripted_reply_for(&self, frame_type: u8) -> Option<Vec<u8>> {
        let reply = self.state.replies.lock().unwrap().pop_front()?;
        match reply {
            MockReply::Ack => Some(ack_frame(frame_type)),
            MockReply::Refuse => Some(refuse_frame(frame_type)),
            MockReply::Frame(bytes) => Some(bytes),
            MockReply::Silent => None,
        }
    }
}

/// A non-zero acknowledgement frame for the given command type.
pub fn ack_frame(frame_type: u8) -> Vec<u8> {
    Frame::encode(frame_type.wrapping_add(1), &[0x01]).expect("ack payload fits a frame")
}

/// A zero-byte refusal frame for the given command type.
pub fn refuse_frame(frame_type: u8) -> Vec<u8> {
    Frame::encode(frame_type.wrapping_add(1), &[0x00]).expect("refusal payload fits a frame")
}

#[async_trait]
impl Transport for MockTransport {
    async fn write(&self, bytes: &[u8]) -> Result<()> {
        self.state.write_attempts.fetch_add(1, Ordering::SeqCst);

        if self.state.disconnected.load(Ordering::SeqCst) {
            return Err(Error::Disconnected);
        }
        if self.state.fail_all_writes.load(Ordering::SeqCst) {
            return Err(Error::Transport("injected write failure".into()));
        }
        let remaining = self.state.fail_next_writes.load(Ordering::SeqCst);
        if remaining > 0 {
            self.state
                .fail_next_writes
                .store(remaining - 1, Ordering::SeqCst);
            return Err(Error::Transport("injected write failure".into()));
        }

        self.state.writes.lock().unwrap().push(bytes.to_vec());

        // Answer command frames from the script; image rows get no reply,
        // matching the real printer.
        let frame_type = bytes.get(2).copied();
        if let Some(frame_type) = frame_type {
            if frame_type != CMD_IMAGE_ROW {
                if let Some(reply) = self.scripted_reply_for(frame_type) {
                    let tx = self.state.inbound.lock().unwrap().clone();
                    if let Some(tx) = tx {
                        let _ = tx.send(reply).await;
                    }
                }
            }
        }
        Ok(())
    }

    async fn subscribe_inbound(&self) -> Result<mpsc::Receiver<Vec<u8>>> {
        let (tx, rx) = mpsc::channel(64);
        *self.state.inbound.lock().unwrap() = Some(tx);
        Ok(rx)
    }

    async fn disconnect(&self) -> Result<()> {
        self.state.disconnected.store(true, Ordering::SeqCst);
        // Dropping the sender closes the inbound channel, which is the
        // "transport is gone" signal consumers react to.
        self.state.inbound.lock().unwrap().take();
        Ok(())
    }
}
