pub mod program;
pub mod slider;

pub use program::{presets, ConstantThrottle, Hover, ThrottleProgram, TimedBurn};
pub use slider::{PointerEvent, ThrustSlider};
