//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common frame and mock setup so tests across
//! the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::protocol::Frame;
use crate::transport::{MockReply, MockTransport};

/// Build a full wire frame carrying the given response payload.
#[doc(hidden)]
pub fn response_frame(frame_type: u8, payload: &[u8]) -> Vec<u8> {
    Frame::encode(frame_type, payload).expect("test payload fits a frame")
}

/// Build a GetPrintStatus response frame.
#[doc(hidden)]
pub fn status_frame(page: u16, progress1: u8, progress2: u8) -> Vec<u8> {
    let mut payload = page.to_be_bytes().to_vec();
    payload.push(progress1);
    payload.push(progress2);
    response_frame(0xB3, &payload)
}

/// Build a MockTransport pre-seeded with the given scripted replies.
#[doc(hidden)]
pub fn scripted_mock(replies: Vec<MockReply>) -> MockTransport {
    let mock = MockTransport::new();
    for reply in replies {
        mock.push_reply(reply);
    }
    mock
}
