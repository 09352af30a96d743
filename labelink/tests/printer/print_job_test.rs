#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use image::RgbaImage;
use labelink::transport::{MockReply, MockTransport};
use labelink::types::Quantity;
use labelink::{PrintJobConfig, Printer};

fn black_label(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba([0, 0, 0, 255]))
}

async fn connect(mock: &MockTransport) -> Printer {
    Printer::connect(Arc::new(mock.clone())).await.unwrap()
}

fn count(types: &[u8], wanted: u8) -> usize {
    types.iter().filter(|&&t| t == wanted).count()
}

#[tokio::test(start_paused = true)]
async fn two_copy_job_polls_until_page_count_matches() {
    let mock = MockTransport::new();
    mock.push_acks(7);
    mock.push_reply(MockReply::Frame(common::fixtures::status_frame(0, 50, 50)));
    mock.push_reply(MockReply::Frame(common::fixtures::status_frame(1, 50, 50)));
    mock.push_reply(MockReply::Frame(common::fixtures::status_frame(2, 100, 100)));
    mock.push_acks(1);

    let mut printer = connect(&mock).await;
    let mut config = PrintJobConfig::new(8, 4);
    config.quantity = Quantity::new(2).unwrap();
    printer.print(&black_label(8, 4), &config).await.unwrap();

    let types = mock.written_types();
    assert_eq!(count(&types, 0xA3), 3, "three status polls");
    assert_eq!(count(&types, 0x85), 4, "one packet per row");
    assert_eq!(count(&types, 0xF3), 1, "one EndPrint");
}

#[tokio::test(start_paused = true)]
async fn end_page_is_retried_while_the_printer_flushes() {
    let mock = MockTransport::new();
    mock.push_acks(6);
    // The printer refuses EndPagePrint twice while rows drain, then accepts.
    mock.push_reply(MockReply::Refuse);
    mock.push_reply(MockReply::Refuse);
    mock.push_reply(MockReply::Ack);
    mock.push_reply(MockReply::Frame(common::fixtures::status_frame(1, 100, 100)));
    mock.push_acks(1);

    let mut printer = connect(&mock).await;
    let config = PrintJobConfig::new(8, 1);
    printer.print(&black_label(8, 1), &config).await.unwrap();

    assert_eq!(count(&mock.written_types(), 0xE3), 3);
}

#[tokio::test(start_paused = true)]
async fn full_progress_streak_completes_without_page_count() {
    let mock = MockTransport::new();
    mock.push_acks(7);
    // Page count never reaches the requested quantity, but progress holds
    // at 100 for three consecutive polls.
    for _ in 0..3 {
        mock.push_reply(MockReply::Frame(common::fixtures::status_frame(0, 100, 100)));
    }
    mock.push_acks(1);

    let mut printer = connect(&mock).await;
    let config = PrintJobConfig::new(8, 1);
    printer.print(&black_label(8, 1), &config).await.unwrap();

    assert_eq!(count(&mock.written_types(), 0xA3), 3);
}

#[tokio::test(start_paused = true)]
async fn stalled_nonzero_progress_completes() {
    let mock = MockTransport::new();
    mock.push_acks(7);
    // Identical nonzero progress: the first poll seeds the comparison,
    // ten unchanged polls after it fire the stall heuristic.
    for _ in 0..11 {
        mock.push_reply(MockReply::Frame(common::fixtures::status_frame(0, 60, 60)));
    }
    mock.push_acks(1);

    let mut printer = connect(&mock).await;
    let config = PrintJobConfig::new(8, 1);
    printer.print(&black_label(8, 1), &config).await.unwrap();

    assert_eq!(count(&mock.written_types(), 0xA3), 11);
}

#[tokio::test(start_paused = true)]
async fn poll_ceiling_finishes_the_job_best_effort() {
    let mock = MockTransport::new();
    mock.push_acks(7);
    // Zero progress forever: no heuristic fires, the ceiling ends polling
    // without failing the job.
    for _ in 0..50 {
        mock.push_reply(MockReply::Frame(common::fixtures::status_frame(0, 0, 0)));
    }
    mock.push_acks(1);

    let mut printer = connect(&mock).await;
    let config = PrintJobConfig::new(8, 1);
    printer.print(&black_label(8, 1), &config).await.unwrap();

    let types = mock.written_types();
    assert_eq!(count(&types, 0xA3), 50);
    assert_eq!(types.last(), Some(&0xF3));
}

#[tokio::test(start_paused = true)]
async fn row_packets_carry_ascending_row_indexes() {
    let mock = MockTransport::new();
    mock.push_acks(7);
    mock.push_reply(MockReply::Frame(common::fixtures::status_frame(1, 100, 100)));
    mock.push_acks(1);

    let mut printer = connect(&mock).await;
    let config = PrintJobConfig::new(8, 3);
    printer.print(&black_label(8, 3), &config).await.unwrap();

    let rows: Vec<Vec<u8>> = mock
        .writes()
        .into_iter()
        .filter(|w| w[2] == 0x85)
        .collect();
    assert_eq!(rows.len(), 3);
    for (y, wire) in rows.iter().enumerate() {
        let frame = labelink::protocol::Frame::decode(wire).unwrap();
        assert_eq!(&frame.payload()[..2], &(y as u16).to_be_bytes());
    }
}
