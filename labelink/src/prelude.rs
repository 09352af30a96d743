// labelink/labelink/src/prelude.rs

pub use crate::link::Link;
pub use crate::printer::{CompletionPolicy, PrintJobState, Printer};
pub use crate::protocol::responses::{DeviceInfo, HeartbeatReport, RfidRecord, StatusReport};
pub use crate::protocol::{Command, Frame};
pub use crate::raster::{Raster, RasterOptions};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{Density, Error, InfoKey, LabelType, PrintJobConfig, Quantity, Result};
