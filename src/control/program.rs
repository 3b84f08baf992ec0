use crate::dynamics::{FlightState, MAX_THRUST};

/// Scripted stand-in for the operator's hand on the thrust slider.
///
/// Implement this to fly the simulation headless; see [`crate::sim::runner`].
pub trait ThrottleProgram {
    /// Commanded thrust for the next step. Clamped by the caller.
    fn throttle(&mut self, state: &FlightState, dt: f64) -> f64;

    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

// ---------------------------------------------------------------------------
// Constant throttle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ConstantThrottle {
    pub thrust: f64,
}

impl ThrottleProgram for ConstantThrottle {
    fn throttle(&mut self, _state: &FlightState, _dt: f64) -> f64 {
        self.thrust
    }

    fn name(&self) -> &str {
        "constant"
    }
}

// ---------------------------------------------------------------------------
// Burn for a fixed time, then cut
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TimedBurn {
    pub thrust: f64,
    pub duration: f64, // s
}

impl ThrottleProgram for TimedBurn {
    fn throttle(&mut self, state: &FlightState, _dt: f64) -> f64 {
        if state.time < self.duration {
            self.thrust
        } else {
            0.0
        }
    }

    fn name(&self) -> &str {
        "timed burn"
    }
}

// ---------------------------------------------------------------------------
// Hover: hold a target height with a proportional-derivative law
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Hover {
    pub target: f64,
    pub gravity: f64,
    pub kp: f64,
    pub kd: f64,
}

impl Hover {
    pub fn new(target: f64, gravity: f64) -> Self {
        Self { target, gravity, kp: 2.0, kd: 3.0 }
    }
}

impl ThrottleProgram for Hover {
    fn throttle(&mut self, state: &FlightState, _dt: f64) -> f64 {
        let error = self.target - state.position;
        // Feed-forward gravity, then correct
        (self.gravity + self.kp * error - self.kd * state.velocity).clamp(0.0, MAX_THRUST)
    }

    fn name(&self) -> &str {
        "hover"
    }
}

pub mod presets {
    use super::*;

    /// Full thrust until the tank is dry.
    pub fn full_burn() -> ConstantThrottle {
        ConstantThrottle { thrust: MAX_THRUST }
    }

    /// Three-quarter thrust for ten seconds, then coast with fuel to spare.
    pub fn short_hop() -> TimedBurn {
        TimedBurn { thrust: 75.0, duration: 10.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_burn_cuts_off() {
        let mut p = TimedBurn { thrust: 80.0, duration: 1.0 };
        let mut s = FlightState::new(0.0);
        assert_eq!(p.throttle(&s, 0.01), 80.0);
        s.time = 1.0;
        assert_eq!(p.throttle(&s, 0.01), 0.0);
    }

    #[test]
    fn hover_pushes_harder_below_target() {
        let mut p = Hover::new(100.0, 50.0);
        let mut s = FlightState::new(0.0);
        s.position = 50.0;
        let low = p.throttle(&s, 0.01);
        s.position = 100.0;
        let on_target = p.throttle(&s, 0.01);
        assert!(low > on_target);
        assert!((on_target - 50.0).abs() < 1e-12, "holds against gravity");
    }

    #[test]
    fn hover_output_in_range() {
        let mut p = Hover::new(10_000.0, 50.0);
        let s = FlightState::new(0.0);
        assert_eq!(p.throttle(&s, 0.01), MAX_THRUST);
    }
}
