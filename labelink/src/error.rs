// labelink/labelink/src/error.rs

use thiserror::Error;

/// Common error type for the whole crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("payload too large: {actual} bytes, frame limit is {limit}")]
    PayloadTooLarge { actual: usize, limit: usize },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("transport disconnected")]
    Disconnected,

    #[error("operation timed out")]
    Timeout,

    #[error("command refused by printer")]
    Refused,

    #[error("response too short: expected at least {expected} bytes, got {actual}")]
    ShortResponse { expected: usize, actual: usize },

    #[error("response format error: {0}")]
    ResponseFormat(String),

    #[error("print job failed at {step}: {source}")]
    JobStep {
        step: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error with the print-job step it occurred in.
    pub(crate) fn at_step(self, step: &'static str) -> Self {
        Error::JobStep {
            step,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
