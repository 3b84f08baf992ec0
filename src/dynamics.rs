pub mod state;
pub mod step;

pub use state::{FlightPhase, FlightState, MAX_FUEL, MAX_THRUST};
pub use step::{step, Landing, StepParams, StepReport};
