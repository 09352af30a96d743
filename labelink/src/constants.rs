// labelink/labelink/src/constants.rs
//! Common protocol constants used across the crate

use std::time::Duration;

/// Wire frame header: 0x55 0x55
pub const FRAME_HEADER: [u8; 2] = [0x55, 0x55];

/// Wire frame footer: 0xAA 0xAA
pub const FRAME_FOOTER: [u8; 2] = [0xAA, 0xAA];

/// Minimal wire frame length in bytes: header(2) + type(1) + len(1) + checksum(1) + footer(2)
pub const MIN_FRAME_LEN: usize = 7;

/// Maximum payload length carried by a single frame
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Command type byte: set print density
pub const CMD_SET_DENSITY: u8 = 0x21;
/// Command type byte: set label type
pub const CMD_SET_LABEL_TYPE: u8 = 0x23;
/// Command type byte: start a print session
pub const CMD_START_PRINT: u8 = 0x01;
/// Command type byte: end a print session
pub const CMD_END_PRINT: u8 = 0xF3;
/// Command type byte: start a page
pub const CMD_START_PAGE_PRINT: u8 = 0x03;
/// Command type byte: end a page
pub const CMD_END_PAGE_PRINT: u8 = 0xE3;
/// Command type byte: set page dimensions
pub const CMD_SET_DIMENSIONS: u8 = 0x13;
/// Command type byte: set page quantity
pub const CMD_SET_QUANTITY: u8 = 0x15;
/// Command type byte: query print status
pub const CMD_GET_PRINT_STATUS: u8 = 0xA3;
/// Command type byte: device heartbeat
pub const CMD_HEARTBEAT: u8 = 0xDC;
/// Command type byte: query a device info key
pub const CMD_GET_INFO: u8 = 0x40;
/// Command type byte: read the label RFID tag
pub const CMD_GET_RFID: u8 = 0x1A;
/// Command type byte: one bitmap row of image data
pub const CMD_IMAGE_ROW: u8 = 0x85;

/// Maximum attempts per queued write before it fails
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Backoff unit between write attempts; attempt n waits n * this
pub const WRITE_BACKOFF_STEP: Duration = Duration::from_millis(50);

/// Settle delay after a response-expecting write, so the printer's
/// transport buffer is not overrun before it can answer
pub const WRITE_SETTLE_DELAY: Duration = Duration::from_millis(10);

/// Default timeout when awaiting a command acknowledgement
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Shorter timeout for StartPagePrint, which some firmware never acks
pub const PAGE_START_TIMEOUT: Duration = Duration::from_millis(200);

/// Maximum EndPagePrint attempts while the printer is still flushing rows
pub const END_PAGE_MAX_ATTEMPTS: u32 = 100;

/// Spacing between EndPagePrint attempts
pub const END_PAGE_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Per-attempt ack timeout inside the EndPagePrint retry loop; the loop's
/// own spacing provides the waiting, not the ack deadline
pub const END_PAGE_ACK_TIMEOUT: Duration = Duration::from_millis(100);
