// fixtures.rs — commonly used wire frames and payloads
#![allow(dead_code)]

use labelink::protocol::Frame;

/// SetDensity(3) as captured on the wire.
pub fn set_density_wire() -> Vec<u8> {
    hex::decode("555521010323aaaa").unwrap()
}

/// GetPrintStatus response frame: page + both progress channels.
pub fn status_frame(page: u16, progress1: u8, progress2: u8) -> Vec<u8> {
    let mut payload = page.to_be_bytes().to_vec();
    payload.push(progress1);
    payload.push(progress2);
    Frame::encode(0xB3, &payload).unwrap()
}

/// Heartbeat response frame with a payload of the given length, each byte
/// equal to its index.
pub fn heartbeat_frame(len: u8) -> Vec<u8> {
    let payload: Vec<u8> = (0..len).collect();
    Frame::encode(0xDD, &payload).unwrap()
}

/// GetInfo response frame carrying the raw value bytes.
pub fn info_frame(value: &[u8]) -> Vec<u8> {
    Frame::encode(0x50, value).unwrap()
}

/// GetRfid response payload for a loaded roll.
pub fn rfid_payload() -> Vec<u8> {
    let mut payload = hex::decode("a1b2c3d4e5f60718").unwrap(); // uuid
    payload.push(6);
    payload.extend_from_slice(b"T50x30");
    payload.push(3);
    payload.extend_from_slice(b"s01");
    payload.extend_from_slice(&240u16.to_be_bytes());
    payload.extend_from_slice(&12u16.to_be_bytes());
    payload.push(2);
    payload
}

/// GetRfid response frame for a loaded roll.
pub fn rfid_frame() -> Vec<u8> {
    Frame::encode(0x2A, &rfid_payload()).unwrap()
}

/// GetRfid response frame for an empty bay (no tag).
pub fn rfid_absent_frame() -> Vec<u8> {
    Frame::encode(0x2A, &[0x00]).unwrap()
}
