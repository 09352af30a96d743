use labelink::protocol::{Command, Frame};
use labelink::types::{Density, InfoKey, LabelType, Quantity};

fn wire_of(cmd: Command) -> (u8, Vec<u8>) {
    let wire = cmd.to_wire().unwrap();
    let frame = Frame::decode(&wire).unwrap();
    (frame.frame_type(), frame.payload().to_vec())
}

#[test]
fn settings_commands_encode() {
    let (t, p) = wire_of(Command::SetDensity(Density::new(5).unwrap()));
    assert_eq!((t, p), (0x21, vec![5]));

    let (t, p) = wire_of(Command::SetLabelType(LabelType::Black));
    assert_eq!((t, p), (0x23, vec![2]));
}

#[test]
fn session_commands_encode() {
    assert_eq!(wire_of(Command::StartPrint), (0x01, vec![1]));
    assert_eq!(wire_of(Command::StartPagePrint), (0x03, vec![1]));
    assert_eq!(wire_of(Command::EndPagePrint), (0xE3, vec![1]));
    assert_eq!(wire_of(Command::EndPrint), (0xF3, vec![1]));
}

#[test]
fn page_commands_encode_big_endian_height_first() {
    let (t, p) = wire_of(Command::SetDimensions {
        width: 384,
        height: 0x0120,
    });
    assert_eq!(t, 0x13);
    assert_eq!(p, vec![0x01, 0x20, 0x01, 0x80]);

    let (t, p) = wire_of(Command::SetQuantity(Quantity::new(300).unwrap()));
    assert_eq!(t, 0x15);
    assert_eq!(p, vec![0x01, 0x2C]);
}

#[test]
fn query_commands_encode() {
    assert_eq!(wire_of(Command::GetPrintStatus), (0xA3, vec![1]));
    assert_eq!(wire_of(Command::Heartbeat), (0xDC, vec![1]));
    assert_eq!(wire_of(Command::GetInfo(InfoKey::BatteryLevel)), (0x40, vec![10]));
    assert_eq!(wire_of(Command::GetRfid), (0x1A, vec![1]));
}
