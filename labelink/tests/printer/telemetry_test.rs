#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use labelink::protocol::responses::DeviceInfo;
use labelink::transport::{MockReply, MockTransport, Transport};
use labelink::types::InfoKey;
use labelink::{Error, Printer};

async fn connect(mock: &MockTransport) -> Printer {
    Printer::connect(Arc::new(mock.clone())).await.unwrap()
}

#[tokio::test(start_paused = true)]
async fn print_status_query_decodes() {
    let mock = MockTransport::new();
    mock.push_reply(MockReply::Frame(common::fixtures::status_frame(1, 40, 30)));

    let printer = connect(&mock).await;
    let report = printer.print_status().await.unwrap();
    assert_eq!(report.page, 1);
    assert_eq!(report.progress(), 30);
}

#[tokio::test(start_paused = true)]
async fn heartbeat_reports_battery_and_lid() {
    let mock = MockTransport::new();
    mock.push_reply(MockReply::Frame(common::fixtures::heartbeat_frame(13)));

    let printer = connect(&mock).await;
    let report = printer.heartbeat().await.unwrap();
    assert_eq!(report.closing_state, Some(9));
    assert_eq!(report.power_level, Some(10));
    assert_eq!(report.paper_state, Some(11));
    assert_eq!(report.rfid_read_state, Some(12));
}

#[tokio::test(start_paused = true)]
async fn device_info_decodes_serial_and_version() {
    let mock = MockTransport::new();
    mock.push_reply(MockReply::Frame(common::fixtures::info_frame(&[
        0xB2, 0x1F, 0x00, 0x3C,
    ])));
    mock.push_reply(MockReply::Frame(common::fixtures::info_frame(&[
        0x00, 0x00, 0x00, 0xFA,
    ])));

    let printer = connect(&mock).await;
    assert_eq!(
        printer.device_info(InfoKey::Serial).await.unwrap(),
        DeviceInfo::Serial("b21f003c".into())
    );
    match printer.device_info(InfoKey::HardwareVersion).await.unwrap() {
        DeviceInfo::Version(v) => assert!((v - 2.5).abs() < 1e-6),
        other => panic!("expected Version, got: {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn rfid_record_present_and_absent() {
    let mock = MockTransport::new();
    mock.push_reply(MockReply::Frame(common::fixtures::rfid_frame()));
    mock.push_reply(MockReply::Frame(common::fixtures::rfid_absent_frame()));

    let printer = connect(&mock).await;
    let record = printer.rfid_record().await.unwrap().unwrap();
    assert_eq!(record.barcode, "T50x30");
    assert_eq!(record.total_len, 240);

    assert_eq!(printer.rfid_record().await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn disconnected_printer_refuses_queries() {
    let mock = MockTransport::new();
    let printer = connect(&mock).await;
    mock.disconnect().await.unwrap();
    // Give the inbound pump a moment to observe the closed channel.
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    match printer.heartbeat().await {
        Err(Error::Disconnected) => {}
        other => panic!("expected Disconnected, got: {:?}", other),
    }
}
