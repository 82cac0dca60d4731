use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;
use traffic_sequencer::{AudioSink, CadencePlayer};

use crate::types::STATE;

/// PWM wrap value: 125 MHz / 62_500 = 2 kHz carrier.
pub const BUZZER_PWM_TOP: u16 = 62_500;

/// The two buzzer channels, driven identically.
///
/// Buzzer A sits on PWM slice 2 output B (GPIO 21), buzzer B on slice 5
/// output A (GPIO 10).
pub struct PwmBuzzers {
    buzzer_a: Pwm<'static>,
    buzzer_b: Pwm<'static>,
    config: PwmConfig,
}

impl PwmBuzzers {
    pub fn new(buzzer_a: Pwm<'static>, buzzer_b: Pwm<'static>, config: PwmConfig) -> Self {
        Self {
            buzzer_a,
            buzzer_b,
            config,
        }
    }
}

impl AudioSink for PwmBuzzers {
    fn set_audio(&mut self, on: bool) {
        // 50% duty when sounding, 0% when silent.
        let level = if on { BUZZER_PWM_TOP / 2 } else { 0 };
        self.config.compare_a = level;
        self.config.compare_b = level;
        self.buzzer_a.set_config(&self.config);
        self.buzzer_b.set_config(&self.config);
    }
}

#[embassy_executor::task]
pub async fn cadence_task(buzzers: PwmBuzzers) {
    let mut player = CadencePlayer::new(&STATE, buzzers);

    loop {
        Timer::after_millis(player.step()).await;
    }
}
