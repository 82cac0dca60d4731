use embassy_rp::gpio::Output;
use embassy_time::Timer;
use traffic_sequencer::{SemaphoreMachine, Srgb, VisualSink};

use crate::types::STATE;

/// Binary-intensity RGB indicator on three GPIO pins.
pub struct RgbIndicator {
    red: Output<'static>,
    green: Output<'static>,
    blue: Output<'static>,
}

impl RgbIndicator {
    pub fn new(red: Output<'static>, green: Output<'static>, blue: Output<'static>) -> Self {
        Self { red, green, blue }
    }
}

impl VisualSink for RgbIndicator {
    fn set_color(&mut self, color: Srgb<u8>) {
        for (pin, channel) in [
            (&mut self.red, color.red),
            (&mut self.green, color.green),
            (&mut self.blue, color.blue),
        ] {
            if channel > 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }
}

#[embassy_executor::task]
pub async fn semaphore_task(rgb: RgbIndicator) {
    let mut machine = SemaphoreMachine::new(&STATE, rgb);

    loop {
        Timer::after_millis(machine.step()).await;
    }
}
