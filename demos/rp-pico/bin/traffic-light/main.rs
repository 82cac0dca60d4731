//! Traffic-light controller for an RP2040 board with an RGB indicator on
//! GPIO 13/11/12, two PWM buzzers on GPIO 21 and 10, a night-mode button on
//! GPIO 5 and an SSD1306 status display on I2C1 (SDA 14 / SCL 15). One
//! embassy task per schedulable unit; everything coordinates through the
//! shared [`STATE`](types::STATE) cell.

#![no_std]
#![no_main]

use core::future::pending;
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

mod button_task;
mod cadence_task;
mod display_task;
mod semaphore_task;
mod types;

use button_task::button_task;
use cadence_task::{BUZZER_PWM_TOP, PwmBuzzers, cadence_task};
use display_task::display_task;
use semaphore_task::{RgbIndicator, semaphore_task};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Starting...");

    let rgb = RgbIndicator::new(
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
    );

    // 2 kHz carrier at the default 125 MHz system clock.
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = BUZZER_PWM_TOP;
    let buzzers = PwmBuzzers::new(
        Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, pwm_config.clone()),
        Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, pwm_config.clone()),
        pwm_config,
    );

    let button = Input::new(p.PIN_5, Pull::Up);

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    spawner.spawn(semaphore_task(rgb)).unwrap();
    spawner.spawn(cadence_task(buzzers)).unwrap();
    spawner.spawn(display_task(i2c)).unwrap();
    spawner.spawn(button_task(button)).unwrap();

    info!("Ready!");

    // Main task has no more work to do - all logic is in spawned tasks
    pending::<()>().await;
}
