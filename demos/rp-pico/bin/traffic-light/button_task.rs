use defmt::info;
use embassy_rp::gpio::Input;
use traffic_sequencer::{ModeToggle, TimeSource};

use crate::types::STATE;
use rp_pico_demo::time::{EmbassyInstant, EmbassyTimeSource};

#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    let time_source = EmbassyTimeSource::new();
    let mut toggle = ModeToggle::<EmbassyInstant>::new();

    loop {
        // Button is active low: a falling edge is a press.
        button.wait_for_falling_edge().await;

        if toggle.toggle_if_debounced(time_source.now(), &STATE) {
            info!("mode toggled: {:?}", STATE.mode());
        }
    }
}
