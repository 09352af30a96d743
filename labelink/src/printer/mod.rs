// labelink/labelink/src/printer/mod.rs

//! Public printer handle: one `Printer` per transport connection, one
//! print job at a time.

pub mod job;

pub use job::{CompletionPolicy, PrintJobState};

use std::sync::Arc;

use image::RgbaImage;
use log::info;

use crate::constants::DEFAULT_RESPONSE_TIMEOUT;
use crate::link::Link;
use crate::protocol::responses::{
    decode_heartbeat, decode_info, decode_rfid, decode_print_status, DeviceInfo, HeartbeatReport,
    RfidRecord, StatusReport,
};
use crate::protocol::{Command, Frame};
use crate::raster::{Raster, RasterOptions};
use crate::transport::Transport;
use crate::types::{InfoKey, PrintJobConfig};
use crate::{Error, Result};

use job::JobRunner;

/// A connected label printer speaking the row-bitmap protocol.
pub struct Printer {
    link: Link,
    policy: CompletionPolicy,
}

impl Printer {
    /// Attach to an already-connected transport with default completion
    /// heuristics.
    pub async fn connect(transport: Arc<dyn Transport>) -> Result<Self> {
        Self::connect_with_policy(transport, CompletionPolicy::default()).await
    }

    /// Attach with custom completion heuristics for firmware that reports
    /// progress differently.
    pub async fn connect_with_policy(
        transport: Arc<dyn Transport>,
        policy: CompletionPolicy,
    ) -> Result<Self> {
        let link = Link::open(transport).await?;
        Ok(Self { link, policy })
    }

    /// The completion heuristics in effect.
    pub fn completion_policy(&self) -> &CompletionPolicy {
        &self.policy
    }

    /// Replace the completion heuristics.
    pub fn set_completion_policy(&mut self, policy: CompletionPolicy) {
        self.policy = policy;
    }

    /// Print an RGBA image as one job. Takes `&mut self`: one job per
    /// connection at a time, by construction.
    pub async fn print(&mut self, image: &RgbaImage, config: &PrintJobConfig) -> Result<()> {
        let raster = Raster::from_image(image, raster_options(config))?;
        self.print_raster(&raster, config).await
    }

    /// Print a raw RGBA8 buffer of length `width * height * 4`.
    pub async fn print_rgba(
        &mut self,
        rgba: &[u8],
        width: u32,
        height: u32,
        config: &PrintJobConfig,
    ) -> Result<()> {
        let raster = Raster::from_rgba(rgba, width, height, raster_options(config))?;
        self.print_raster(&raster, config).await
    }

    async fn print_raster(&mut self, raster: &Raster, config: &PrintJobConfig) -> Result<()> {
        if raster.width() != u32::from(config.width) || raster.height() != u32::from(config.height)
        {
            return Err(Error::InvalidArgument(format!(
                "raster is {}x{} but the job is configured for {}x{}",
                raster.width(),
                raster.height(),
                config.width,
                config.height
            )));
        }

        info!(
            "printing {}x{} label, {} copies, density {}",
            config.width,
            config.height,
            config.quantity.as_u16(),
            config.density.as_u8()
        );
        let mut runner = JobRunner::new(&self.link, config, &self.policy);
        runner.run(raster).await
    }

    /// Query the current print status.
    pub async fn print_status(&self) -> Result<StatusReport> {
        let payload = self.query(Command::GetPrintStatus).await?;
        decode_print_status(&payload)
    }

    /// Query the printer's physical state (lid, battery, paper, RFID).
    pub async fn heartbeat(&self) -> Result<HeartbeatReport> {
        let payload = self.query(Command::Heartbeat).await?;
        decode_heartbeat(&payload)
    }

    /// Query one device info key.
    pub async fn device_info(&self, key: InfoKey) -> Result<DeviceInfo> {
        let payload = self.query(Command::GetInfo(key)).await?;
        decode_info(key, &payload)
    }

    /// Read the RFID record of the loaded label roll, if a tag is present.
    pub async fn rfid_record(&self) -> Result<Option<RfidRecord>> {
        let payload = self.query(Command::GetRfid).await?;
        decode_rfid(&payload)
    }

    /// Tear down the session and the transport. All in-flight state fails
    /// with `Disconnected`; printing again requires a fresh connection.
    pub async fn disconnect(self) -> Result<()> {
        self.link.disconnect().await
    }

    async fn query(&self, command: Command) -> Result<Vec<u8>> {
        let request = command.to_wire()?;
        match self.link.request(request, DEFAULT_RESPONSE_TIMEOUT).await? {
            Some(bytes) => Ok(Frame::decode(&bytes)?.into_payload()),
            None => Err(Error::Timeout),
        }
    }
}

fn raster_options(config: &PrintJobConfig) -> RasterOptions {
    RasterOptions {
        rotate: config.rotate,
        invert_color: config.invert_color,
    }
}
