//! Dotclock - Dot-Matrix LED Clock Firmware
//!
//! Main firmware binary for an RP2040 driving four chained MAX7219 8x8
//! LED matrices. Alternates a scrolling date banner with a digital clock
//! face whose seconds slide upward.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

use dotclock_core::command::Command;
use dotclock_core::controller::DisplayController;
use dotclock_core::traits::MatrixDriver;
use dotclock_drivers::Max7219Chain;

use crate::channels::COMMAND_CHANNEL;
use crate::pins::PinBank;

mod channels;
mod config;
mod pins;
mod tasks;

/// Greeting shown until the first frame of the clock
const BOOT_MESSAGE: &str = "Dotclock";
const BOOT_MESSAGE_MS: u32 = 3_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dotclock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Chip-select idles high; clock and data start low
    let mut bank = PinBank::new(p);
    let (clk, data, cs) = match (
        bank.take(config.matrix.clk_pin),
        bank.take(config.matrix.data_pin),
        bank.take(config.matrix.cs_pin),
    ) {
        (Ok(clk), Ok(data), Ok(cs)) => (clk, data, cs),
        (clk, data, cs) => {
            // build.rs rejects reused pins in clock.toml
            error!(
                "Matrix pins unavailable: clk={} data={} cs={}",
                clk.err(),
                data.err(),
                cs.err()
            );
            panic!("matrix pin assignment");
        }
    };
    let mut driver = Max7219Chain::new(
        Output::new(clk, Level::Low),
        Output::new(data, Level::Low),
        Output::new(cs, Level::High),
    );

    match driver.configure() {
        Ok(()) => info!("Matrix chain configured"),
        Err(e) => error!("Matrix configuration failed: {}", Debug2Format(&e)),
    }

    let controller = DisplayController::new(&config);

    if COMMAND_CHANNEL
        .try_send(Command::show_message(BOOT_MESSAGE, BOOT_MESSAGE_MS))
        .is_err()
    {
        warn!("Command channel full, skipping boot message");
    }

    spawner
        .spawn(tasks::display_task(driver, controller, config.clock.refresh_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
