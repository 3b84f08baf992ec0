pub mod clock;
pub mod event;
pub mod runner;
pub mod session;
pub mod telemetry;

pub use runner::{fly_with, Flight};
pub use session::{Command, LoopState, Session};
pub use telemetry::{Sample, Telemetry};
