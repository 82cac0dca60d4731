use traffic_sequencer::ControllerState;

/// The shared state cell every task and the button handler observe.
pub static STATE: ControllerState = ControllerState::new();
