pub mod analog_clock;
pub mod app;
pub mod controls_panel;
pub mod digital_clock;

pub use analog_clock::AnalogClock;
pub use app::App;
pub use controls_panel::ControlsPanel;
pub use digital_clock::DigitalClock;
