#[path = "../common/mod.rs"]
mod common;

use labelink::protocol::Frame;

#[test]
fn captured_frame_decodes_to_known_command() {
    let wire = common::fixtures::set_density_wire();
    let frame = Frame::decode(&wire).expect("frame decode");
    assert_eq!(frame.frame_type(), 0x21);
    assert_eq!(frame.payload(), &[0x03]);
}

#[test]
fn encode_matches_captured_frame() {
    let wire = Frame::encode(0x21, &[0x03]).unwrap();
    assert_eq!(wire, common::fixtures::set_density_wire());
}

#[test]
fn max_payload_roundtrips() {
    let payload: Vec<u8> = (0..=254u8).chain(std::iter::once(0xFF)).collect();
    assert_eq!(payload.len(), 256);
    assert!(Frame::encode(0x85, &payload).is_err());

    let payload = &payload[..255];
    let wire = Frame::encode(0x85, payload).unwrap();
    let frame = Frame::decode(&wire).unwrap();
    assert_eq!(frame.payload(), payload);
}
