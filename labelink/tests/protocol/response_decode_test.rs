#[path = "../common/mod.rs"]
mod common;

use labelink::protocol::responses::{
    decode_heartbeat, decode_info, decode_print_status, decode_rfid, DeviceInfo,
};
use labelink::protocol::Frame;
use labelink::types::InfoKey;
use labelink::Error;

fn payload_of(wire: &[u8]) -> Vec<u8> {
    Frame::decode(wire).unwrap().into_payload()
}

#[test]
fn status_frame_decodes() {
    let payload = payload_of(&common::fixtures::status_frame(3, 80, 75));
    let report = decode_print_status(&payload).unwrap();
    assert_eq!(report.page, 3);
    assert_eq!(report.progress1, 80);
    assert_eq!(report.progress2, 75);
    assert_eq!(report.progress(), 75);
}

#[test]
fn status_frame_too_short_is_an_error() {
    match decode_print_status(&[0x00]) {
        Err(Error::ShortResponse { .. }) => {}
        other => panic!("expected ShortResponse, got: {:?}", other),
    }
}

#[test]
fn heartbeat_known_lengths_decode_their_fields() {
    // Each observed payload length carries a different subset of fields.
    let cases: &[(u8, [Option<u8>; 4])] = &[
        (9, [Some(8), None, None, None]),
        (10, [Some(8), Some(9), None, None]),
        (13, [Some(9), Some(10), Some(11), Some(12)]),
        (19, [Some(15), Some(16), Some(17), Some(18)]),
        (20, [Some(9), Some(10), Some(18), Some(19)]),
    ];
    for &(len, [closing, power, paper, rfid]) in cases {
        let payload = payload_of(&common::fixtures::heartbeat_frame(len));
        let report = decode_heartbeat(&payload).unwrap();
        assert_eq!(report.closing_state, closing, "length {}", len);
        assert_eq!(report.power_level, power, "length {}", len);
        assert_eq!(report.paper_state, paper, "length {}", len);
        assert_eq!(report.rfid_read_state, rfid, "length {}", len);
    }
}

#[test]
fn heartbeat_unknown_length_decodes_all_absent() {
    let payload = payload_of(&common::fixtures::heartbeat_frame(17));
    let report = decode_heartbeat(&payload).unwrap();
    assert_eq!(report.closing_state, None);
    assert_eq!(report.power_level, None);
    assert_eq!(report.paper_state, None);
    assert_eq!(report.rfid_read_state, None);
}

#[test]
fn info_decodes_by_key() {
    let serial = payload_of(&common::fixtures::info_frame(&[0xB2, 0x1F, 0x00, 0x3C]));
    assert_eq!(
        decode_info(InfoKey::Serial, &serial).unwrap(),
        DeviceInfo::Serial("b21f003c".into())
    );

    let version = payload_of(&common::fixtures::info_frame(&[0x00, 0x00, 0x01, 0x2C]));
    match decode_info(InfoKey::SoftwareVersion, &version).unwrap() {
        DeviceInfo::Version(v) => assert!((v - 3.0).abs() < 1e-6),
        other => panic!("expected Version, got: {:?}", other),
    }

    let battery = payload_of(&common::fixtures::info_frame(&[0x04]));
    assert_eq!(
        decode_info(InfoKey::BatteryLevel, &battery).unwrap(),
        DeviceInfo::Value(4)
    );
}

#[test]
fn rfid_decodes_present_and_absent_tags() {
    let record = decode_rfid(&common::fixtures::rfid_payload())
        .unwrap()
        .unwrap();
    assert_eq!(record.uuid, "a1b2c3d4e5f60718");
    assert_eq!(record.barcode, "T50x30");
    assert_eq!(record.serial, "s01");
    assert_eq!(record.total_len, 240);
    assert_eq!(record.used_len, 12);
    assert_eq!(record.kind, 2);

    let absent = payload_of(&common::fixtures::rfid_absent_frame());
    assert_eq!(decode_rfid(&absent).unwrap(), None);
}
