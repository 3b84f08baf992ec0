// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const MAX_FUEL: f64 = 100.0;
pub const MAX_THRUST: f64 = 100.0;

// ---------------------------------------------------------------------------
// Flight phase
// ---------------------------------------------------------------------------

/// `Flying` until the terminal condition (velocity <= 0 with an empty tank)
/// is first met, then `Landed` until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightPhase {
    #[default]
    Flying,
    Landed,
}

// ---------------------------------------------------------------------------
// Simulation state: the single record every step reads and writes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub time: f64,           // s since start or last reset
    pub position: f64,       // height above ground, >= 0
    pub velocity: f64,       // positive = up
    pub thrust: f64,         // [0, MAX_THRUST]
    pub fuel: f64,           // [0, MAX_FUEL]
    pub high_score: f64,     // best landed height, >= 0
    pub dragging: bool,      // operator holds the thrust knob
    pub phase: FlightPhase,
    pub new_high_score: bool, // last landing beat the record
}

impl FlightState {
    /// Fresh flight on the pad with a full tank.
    pub fn new(high_score: f64) -> Self {
        Self {
            time: 0.0,
            position: 0.0,
            velocity: 0.0,
            thrust: 0.0,
            fuel: MAX_FUEL,
            high_score: high_score.max(0.0),
            dragging: false,
            phase: FlightPhase::Flying,
            new_high_score: false,
        }
    }

    /// Back to the pad. The record survives.
    pub fn reset(&mut self) {
        *self = Self::new(self.high_score);
    }

    pub fn fuel_fraction(&self) -> f64 {
        (self.fuel / MAX_FUEL).clamp(0.0, 1.0)
    }

    /// Velocity <= 0 with an empty tank: the flight cannot climb any more.
    pub fn is_terminal(&self) -> bool {
        self.velocity <= 0.0 && self.fuel == 0.0
    }

    /// Operator-set thrust, clamped to the legal range.
    pub fn set_thrust(&mut self, thrust: f64) {
        self.thrust = thrust.clamp(0.0, MAX_THRUST);
    }
}
