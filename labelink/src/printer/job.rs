// labelink/labelink/src/printer/job.rs

use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::sleep;

use crate::constants::{
    DEFAULT_RESPONSE_TIMEOUT, END_PAGE_ACK_TIMEOUT, END_PAGE_MAX_ATTEMPTS, END_PAGE_RETRY_DELAY,
    PAGE_START_TIMEOUT,
};
use crate::link::Link;
use crate::protocol::responses::{decode_print_status, StatusReport};
use crate::protocol::{Command, Frame};
use crate::raster::Raster;
use crate::types::PrintJobConfig;
use crate::{Error, Result};

/// Completion heuristics for the status-polling phase. These thresholds are
/// empirical, not protocol-documented; firmware variants may need different
/// values, which is why they are policy rather than constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionPolicy {
    /// Delay between GetPrintStatus polls (also the per-poll ack deadline)
    pub poll_interval: Duration,
    /// Poll ceiling; reaching it ends polling without failing the job
    pub max_polls: u32,
    /// Consecutive polls at 100% progress that count as done
    pub full_progress_streak: u32,
    /// Consecutive unchanged polls (with nonzero progress) that count as done
    pub stall_streak: u32,
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            max_polls: 50,
            full_progress_streak: 3,
            stall_streak: 10,
        }
    }
}

/// Current step of a print job. Linear; the only loop is the polling
/// sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintJobState {
    Idle,
    DensitySet,
    TypeSet,
    PrintStarted,
    PageStarted,
    DimensionsSet,
    QuantitySet,
    Streaming,
    PageEnded,
    Polling,
    Completed,
    Failed,
}

/// Drives one print job over a live link. One runner per job; the caller
/// guarantees no other job runs on the same connection meanwhile.
pub(crate) struct JobRunner<'a> {
    link: &'a Link,
    config: &'a PrintJobConfig,
    policy: &'a CompletionPolicy,
    state: PrintJobState,
}

impl<'a> JobRunner<'a> {
    pub(crate) fn new(
        link: &'a Link,
        config: &'a PrintJobConfig,
        policy: &'a CompletionPolicy,
    ) -> Self {
        Self {
            link,
            config,
            policy,
            state: PrintJobState::Idle,
        }
    }

    /// Run the job to completion. Once StartPrint has been acknowledged,
    /// EndPrint is attempted even on the failure path, so the printer is
    /// never left inside a half-open session on our account.
    pub(crate) async fn run(&mut self, raster: &Raster) -> Result<()> {
        self.step_required(Command::SetDensity(self.config.density), PrintJobState::DensitySet)
            .await?;
        self.step_required(
            Command::SetLabelType(self.config.label_type),
            PrintJobState::TypeSet,
        )
        .await?;
        self.step_required(Command::StartPrint, PrintJobState::PrintStarted)
            .await?;

        let result = self.run_page(raster).await;

        // Best-effort cleanup regardless of how the page went.
        match &result {
            Ok(()) => {
                self.end_print().await;
                self.enter(PrintJobState::Completed);
            }
            Err(err) => {
                warn!("print job failed, closing session: {}", err);
                self.enter(PrintJobState::Failed);
                self.end_print().await;
            }
        }
        result
    }

    pub(crate) fn state(&self) -> PrintJobState {
        self.state
    }

    fn enter(&mut self, state: PrintJobState) {
        debug!("print job: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Steps 4..=9: everything between StartPrint and EndPrint.
    async fn run_page(&mut self, raster: &Raster) -> Result<()> {
        self.start_page().await?;
        self.set_dimensions().await?;
        self.step_required(
            Command::SetQuantity(self.config.quantity),
            PrintJobState::QuantitySet,
        )
        .await?;
        self.stream_rows(raster).await?;
        self.end_page().await?;
        self.poll_until_complete().await
    }

    /// Send a command whose failure (timeout or refusal) is fatal.
    async fn step_required(&mut self, command: Command, state: PrintJobState) -> Result<()> {
        let step = step_name(&command);
        match self.exec(command, DEFAULT_RESPONSE_TIMEOUT).await {
            Ok(Some(bytes)) if ack_ok(&bytes) => {
                self.enter(state);
                Ok(())
            }
            Ok(Some(_)) => Err(Error::Refused.at_step(step)),
            Ok(None) => Err(Error::Timeout.at_step(step)),
            Err(err) => Err(err.at_step(step)),
        }
    }

    /// Step 4: StartPagePrint. The printer may be ready without ever
    /// acknowledging, so a timeout counts as success and a refusal is only
    /// logged; the step uses a short deadline for that reason.
    async fn start_page(&mut self) -> Result<()> {
        match self.exec(Command::StartPagePrint, PAGE_START_TIMEOUT).await {
            Ok(Some(bytes)) if ack_ok(&bytes) => {}
            Ok(Some(_)) => warn!("StartPagePrint refused, continuing"),
            Ok(None) => debug!("StartPagePrint not acknowledged, treating as ready"),
            Err(err) => return Err(err.at_step("StartPagePrint")),
        }
        self.enter(PrintJobState::PageStarted);
        Ok(())
    }

    /// Step 5: SetDimensions. Some firmware acknowledges acceptance with a
    /// zero byte, so a refusal here is deliberately lenient: logged, never
    /// promoted to a job failure.
    async fn set_dimensions(&mut self) -> Result<()> {
        let command = Command::SetDimensions {
            width: self.config.width,
            height: self.config.height,
        };
        match self.exec(command, DEFAULT_RESPONSE_TIMEOUT).await {
            Ok(Some(bytes)) if ack_ok(&bytes) => {}
            Ok(Some(_)) => warn!("SetDimensions answered zero, continuing"),
            Ok(None) => warn!("SetDimensions not acknowledged, continuing"),
            Err(err) => return Err(err.at_step("SetDimensions")),
        }
        self.enter(PrintJobState::DimensionsSet);
        Ok(())
    }

    /// Step 7: stream every row packet, in row order, down the
    /// no-response path.
    async fn stream_rows(&mut self, raster: &Raster) -> Result<()> {
        self.enter(PrintJobState::Streaming);
        let packets = raster.row_packets()?;
        debug!("streaming {} row packets", packets.len());
        for packet in packets {
            self.link
                .send(packet)
                .await
                .map_err(|err| err.at_step("ImageRow"))?;
        }
        Ok(())
    }

    /// Step 8: EndPagePrint, retried while the printer is still flushing
    /// row data out of its buffer.
    async fn end_page(&mut self) -> Result<()> {
        for attempt in 1..=END_PAGE_MAX_ATTEMPTS {
            match self.exec(Command::EndPagePrint, END_PAGE_ACK_TIMEOUT).await {
                Ok(Some(bytes)) if ack_ok(&bytes) => {
                    self.enter(PrintJobState::PageEnded);
                    return Ok(());
                }
                Ok(_) => {
                    debug!(
                        "EndPagePrint not accepted (attempt {}/{})",
                        attempt, END_PAGE_MAX_ATTEMPTS
                    );
                    if attempt < END_PAGE_MAX_ATTEMPTS {
                        sleep(END_PAGE_RETRY_DELAY).await;
                    }
                }
                Err(err) => return Err(err.at_step("EndPagePrint")),
            }
        }
        Err(Error::Refused.at_step("EndPagePrint"))
    }

    /// Step 9: poll GetPrintStatus until a completion heuristic fires or
    /// the poll ceiling is reached. The ceiling ends polling without
    /// failing the job; by then the print has almost certainly finished
    /// and the firmware simply stopped updating counters.
    async fn poll_until_complete(&mut self) -> Result<()> {
        self.enter(PrintJobState::Polling);
        let quantity = self.config.quantity.as_u16();
        let mut full_streak = 0u32;
        let mut stall_streak = 0u32;
        let mut last: Option<StatusReport> = None;

        for poll in 1..=self.policy.max_polls {
            sleep(self.policy.poll_interval).await;

            let response = self
                .exec(Command::GetPrintStatus, self.policy.poll_interval)
                .await
                .map_err(|err| err.at_step("GetPrintStatus"))?;
            let Some(bytes) = response else {
                debug!("status poll {} unanswered", poll);
                continue;
            };
            let report = match decode_status_bytes(&bytes) {
                Ok(report) => report,
                Err(err) => {
                    warn!("undecodable status payload on poll {}: {}", poll, err);
                    continue;
                }
            };
            debug!(
                "status poll {}: page {}/{}, progress {}/{}",
                poll, report.page, quantity, report.progress1, report.progress2
            );

            if report.page >= quantity {
                info!("all {} pages reported printed", quantity);
                return Ok(());
            }

            let progress = report.progress();
            full_streak = if progress >= 100 { full_streak + 1 } else { 0 };
            if full_streak >= self.policy.full_progress_streak {
                info!("progress held at 100 for {} polls", full_streak);
                return Ok(());
            }

            if last == Some(report) && progress > 0 {
                stall_streak += 1;
            } else {
                stall_streak = 0;
            }
            if stall_streak >= self.policy.stall_streak {
                info!("status unchanged for {} polls, treating as complete", stall_streak);
                return Ok(());
            }

            last = Some(report);
        }

        debug!("poll ceiling reached, finishing best-effort");
        Ok(())
    }

    /// Step 10: EndPrint. The print already happened, so errors here are
    /// logged and swallowed.
    async fn end_print(&mut self) {
        match self.exec(Command::EndPrint, DEFAULT_RESPONSE_TIMEOUT).await {
            Ok(Some(bytes)) if ack_ok(&bytes) => debug!("print session closed"),
            Ok(_) => debug!("EndPrint not acknowledged"),
            Err(err) => warn!("EndPrint failed: {}", err),
        }
    }

    async fn exec(&self, command: Command, timeout: Duration) -> Result<Option<Vec<u8>>> {
        self.link.request(command.to_wire()?, timeout).await
    }
}

/// A response counts as an acknowledgement when it decodes as a frame whose
/// first payload byte is non-zero.
fn ack_ok(bytes: &[u8]) -> bool {
    match Frame::decode(bytes) {
        Ok(frame) => frame.payload().first().copied().unwrap_or(0) != 0,
        Err(_) => false,
    }
}

fn decode_status_bytes(bytes: &[u8]) -> Result<StatusReport> {
    let frame = Frame::decode(bytes)?;
    decode_print_status(frame.payload())
}

fn step_name(command: &Command) -> &'static str {
    match command {
        Command::SetDensity(_) => "SetDensity",
        Command::SetLabelType(_) => "SetLabelType",
        Command::StartPrint => "StartPrint",
        Command::EndPrint => "EndPrint",
        Command::StartPagePrint => "StartPagePrint",
        Command::EndPagePrint => "EndPagePrint",
        Command::SetDimensions { .. } => "SetDimensions",
        Command::SetQuantity(_) => "SetQuantity",
        Command::GetPrintStatus => "GetPrintStatus",
        Command::Heartbeat => "Heartbeat",
        Command::GetInfo(_) => "GetInfo",
        Command::GetRfid => "GetRfid",
    }
}
