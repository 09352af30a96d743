// labelink/labelink/src/protocol/frame.rs

use crate::constants::{FRAME_FOOTER, FRAME_HEADER, MAX_PAYLOAD_LEN, MIN_FRAME_LEN};
use crate::protocol::checksum::frame_checksum;
use crate::{Error, Result};

/// One complete wire message, immutable once constructed.
/// Format: [Header(2)] [Type(1)] [Len(1)] [Payload(n)] [Checksum(1)] [Footer(2)]
/// Header: 0x55 0x55, Footer: 0xAA 0xAA
/// Checksum: type XOR len XOR fold_xor(payload)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    frame_type: u8,
    payload: Vec<u8>,
}

impl Frame {
    /// Build a frame from a type byte and payload.
    pub fn new(frame_type: u8, payload: Vec<u8>) -> Result<Self> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                actual: payload.len(),
                limit: MAX_PAYLOAD_LEN,
            });
        }
        Ok(Self {
            frame_type,
            payload,
        })
    }

    /// The command/response type byte.
    pub fn frame_type(&self) -> u8 {
        self.frame_type
    }

    /// The frame payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consume the frame, returning its payload.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Encode a type byte and payload into full wire form.
    pub fn encode(frame_type: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                actual: payload.len(),
                limit: MAX_PAYLOAD_LEN,
            });
        }

        let mut out = Vec::with_capacity(MIN_FRAME_LEN + payload.len());
        out.extend_from_slice(&FRAME_HEADER);
        out.push(frame_type);
        out.push(payload.len() as u8);
        out.extend_from_slice(payload);
        out.push(frame_checksum(frame_type, payload));
        out.extend_from_slice(&FRAME_FOOTER);
        Ok(out)
    }

    /// Encode this frame into full wire form.
    pub fn to_wire(&self) -> Vec<u8> {
        // Length was validated at construction, encode cannot fail here.
        Self::encode(self.frame_type, &self.payload)
            .unwrap_or_else(|_| unreachable!("payload length validated in Frame::new"))
    }

    /// Decode a full wire frame. Only the payload slice is copied.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_FRAME_LEN {
            return Err(Error::FrameFormat(format!(
                "frame too short: {} bytes",
                bytes.len()
            )));
        }

        if bytes[0] != FRAME_HEADER[0] || bytes[1] != FRAME_HEADER[1] {
            return Err(Error::FrameFormat("invalid header".into()));
        }

        let frame_type = bytes[2];
        let len = bytes[3] as usize;

        let required_len = MIN_FRAME_LEN + len;
        if bytes.len() != required_len {
            return Err(Error::FrameFormat(format!(
                "length mismatch: need {} bytes, got {}",
                required_len,
                bytes.len()
            )));
        }

        let payload_start = 4usize;
        let payload_end = payload_start + len;
        let payload = &bytes[payload_start..payload_end];

        let checksum_actual = bytes[payload_end];
        let checksum_expected = frame_checksum(frame_type, payload);
        if checksum_actual != checksum_expected {
            return Err(Error::ChecksumMismatch {
                expected: checksum_expected,
                actual: checksum_actual,
            });
        }

        if bytes[payload_end + 1] != FRAME_FOOTER[0] || bytes[payload_end + 2] != FRAME_FOOTER[1] {
            return Err(Error::FrameFormat("invalid footer".into()));
        }

        Ok(Self {
            frame_type,
            payload: payload.to_vec(),
        })
    }
}
