use core::fmt::Write;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;
use ssd1306::mode::TerminalMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use traffic_sequencer::{Mode, SignalPhase, StatusReporter, StatusSink, status_lines};

use crate::types::STATE;

type StatusDisplay = Ssd1306<
    I2CInterface<I2c<'static, I2C1, i2c::Blocking>>,
    DisplaySize128x64,
    TerminalMode,
>;

/// Two-line status rendering on an SSD1306 in terminal mode.
struct TerminalStatus {
    display: StatusDisplay,
}

impl StatusSink for TerminalStatus {
    fn render(&mut self, mode: Mode, phase: SignalPhase) {
        let (mode_line, phase_line) = status_lines(mode, phase);
        let _ = self.display.clear();
        let _ = self.display.write_str(&mode_line);
        let _ = self.display.set_position(0, 2);
        let _ = self.display.write_str(&phase_line);
    }
}

#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, I2C1, i2c::Blocking>) {
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_terminal_mode();
    display.init().unwrap();
    let _ = display.clear();

    let mut reporter = StatusReporter::new(&STATE, TerminalStatus { display });

    loop {
        Timer::after_millis(reporter.step()).await;
    }
}
