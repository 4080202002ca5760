//! Display task
//!
//! Runs the render/refresh loop at the configured cadence:
//! - Applies queued commands
//! - Renders the current frame (message overlay or clock)
//! - Pushes pending settings and the framebuffer to the matrix chain

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Instant, Ticker};

use dotclock_core::command::Command;
use dotclock_core::controller::{DisplayController, FrameKind};
use dotclock_drivers::Max7219Chain;

use crate::channels::COMMAND_CHANNEL;

/// Matrix chain on three GPIO outputs
pub type Matrix = Max7219Chain<Output<'static>, Output<'static>, Output<'static>>;

/// Display task - renders and refreshes every `refresh_ms`
#[embassy_executor::task]
pub async fn display_task(mut driver: Matrix, mut controller: DisplayController, refresh_ms: u16) {
    info!("Display task started ({}ms refresh)", refresh_ms);

    let mut ticker = Ticker::every(Duration::from_millis(refresh_ms as u64));
    let start = Instant::now();
    let mut last_kind: Option<FrameKind> = None;
    let mut refresh_failed = false;

    loop {
        let now_ms = start.elapsed().as_millis();

        while let Ok(command) = COMMAND_CHANNEL.try_receive() {
            log_command(&command);
            let was_synced = controller.time_base().is_synced();
            controller.apply(command, now_ms);
            if !was_synced && controller.time_base().is_synced() {
                info!(
                    "Clock synced (UTC offset {} min)",
                    controller.time_base().utc_offset_min()
                );
            }
        }

        let frame = controller.render(now_ms);
        let kind = frame.kind();
        if last_kind != Some(kind) {
            if last_kind == Some(FrameKind::Message) {
                info!("Message expired");
            }
            if let Some(message) = controller.message() {
                debug!("Showing message for {}ms", message.duration_ms());
            }
            debug!("Frame: {}", frame);
            last_kind = Some(kind);
        }

        // Log only the first failure of a run of failed refreshes
        match controller.sync_hardware(&mut driver) {
            Ok(()) => refresh_failed = false,
            Err(e) => {
                if !refresh_failed {
                    error!("Matrix refresh failed: {}", Debug2Format(&e));
                }
                refresh_failed = true;
            }
        }

        ticker.next().await;
    }
}

fn log_command(command: &Command) {
    match command {
        Command::SetTime { unix_secs } => info!("Set time: {}", unix_secs),
        Command::ShowMessage { text, duration_ms } => {
            info!("Show message for {}ms: {=str}", duration_ms, text.as_str())
        }
        Command::SetBrightness { percent } => info!("Set brightness: {}%", percent),
        Command::EnableScreen { enabled } => info!("Screen enabled: {}", enabled),
        Command::SetAdditionalInfo { text } => info!("Additional info: {=str}", text.as_str()),
    }
}
