use super::state::{FlightPhase, FlightState};

// ---------------------------------------------------------------------------
// Step parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub dt: f64,           // s
    pub gravity: f64,      // units/s^2, downward
    pub burn_divisor: f64, // fuel/s = thrust / burn_divisor
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            gravity: 50.0,
            burn_divisor: 20.0,
        }
    }
}

impl From<&crate::config::SimConfig> for StepParams {
    fn from(c: &crate::config::SimConfig) -> Self {
        Self {
            dt: c.dt(),
            gravity: c.gravity,
            burn_divisor: c.burn_divisor,
        }
    }
}

// ---------------------------------------------------------------------------
// Step report
// ---------------------------------------------------------------------------

/// Fired on the `Flying -> Landed` transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub position: f64,
    pub new_record: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub grounded: bool,        // ground clamp applied this step
    pub tank_emptied: bool,    // fuel reached 0 during this step
    pub landing: Option<Landing>,
}

// ---------------------------------------------------------------------------
// Explicit Euler step
// ---------------------------------------------------------------------------

/// Advance `state` by one fixed timestep.
///
/// Order: fuel burn, thrust, gravity, position, ground clamp, landing check.
/// The thrust applied is the thrust commanded at the start of the step; once
/// the tank is dry the command is cut to zero.
pub fn step(state: &mut FlightState, p: &StepParams) -> StepReport {
    let mut report = StepReport::default();

    let applied = if state.fuel > 0.0 {
        state.fuel = (state.fuel - state.thrust / p.burn_divisor * p.dt).max(0.0);
        if state.fuel == 0.0 {
            report.tank_emptied = true;
        }
        state.thrust
    } else {
        state.fuel = 0.0;
        0.0
    };
    if state.fuel == 0.0 {
        state.thrust = 0.0;
    }

    state.velocity += applied * p.dt;
    state.velocity -= p.gravity * p.dt;
    state.position += state.velocity * p.dt;
    state.time += p.dt;

    // Inelastic ground contact
    if state.position < 0.0 {
        state.position = 0.0;
        state.velocity = 0.0;
        report.grounded = true;
    }

    if state.phase == FlightPhase::Flying && state.is_terminal() {
        state.phase = FlightPhase::Landed;
        let new_record = state.position > state.high_score;
        if new_record {
            state.high_score = state.position;
            state.new_high_score = true;
        }
        report.landing = Some(Landing {
            position: state.position,
            new_record,
        });
    }

    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::{MAX_FUEL, MAX_THRUST};

    fn params() -> StepParams {
        StepParams::default()
    }

    #[test]
    fn free_fall_from_100() {
        let mut s = FlightState::new(0.0);
        s.position = 100.0;
        let r = step(&mut s, &params());
        assert!((s.velocity - (-50.0 / 60.0)).abs() < 1e-12, "vel = {}", s.velocity);
        assert!((s.position - (100.0 - 50.0 / 3600.0)).abs() < 1e-12);
        assert!((s.position - 99.986).abs() < 1e-3);
        assert_eq!(s.fuel, MAX_FUEL, "no thrust, no burn");
        assert!(!r.grounded);
        assert!(r.landing.is_none());
    }

    #[test]
    fn full_thrust_empties_tank_in_20_seconds() {
        let mut s = FlightState::new(0.0);
        s.thrust = MAX_THRUST;
        let p = params();
        for _ in 0..1199 {
            step(&mut s, &p);
        }
        assert!((s.fuel - 1.0 / 12.0).abs() < 1e-9, "one tick of fuel left, got {}", s.fuel);
        step(&mut s, &p);
        assert!(s.fuel < 1e-9, "20 s of full thrust, fuel = {}", s.fuel);
        step(&mut s, &p);
        assert_eq!(s.fuel, 0.0);
        assert_eq!(s.thrust, 0.0);
    }

    #[test]
    fn fuel_never_negative_and_non_increasing() {
        let mut s = FlightState::new(0.0);
        s.fuel = 0.05;
        s.thrust = 80.0;
        let p = params();
        let mut prev = s.fuel;
        for _ in 0..10 {
            step(&mut s, &p);
            assert!(s.fuel >= 0.0);
            assert!(s.fuel <= prev);
            prev = s.fuel;
        }
        assert_eq!(s.fuel, 0.0);
    }

    #[test]
    fn thrust_cut_when_tank_runs_dry() {
        let mut s = FlightState::new(0.0);
        s.fuel = 0.01;
        s.thrust = 100.0;
        let r = step(&mut s, &params());
        assert!(r.tank_emptied);
        assert_eq!(s.fuel, 0.0);
        assert_eq!(s.thrust, 0.0);
    }

    #[test]
    fn empty_tank_ignores_commanded_thrust() {
        let mut s = FlightState::new(0.0);
        s.position = 500.0;
        s.fuel = 0.0;
        s.thrust = 100.0;
        step(&mut s, &params());
        assert_eq!(s.thrust, 0.0);
        assert!(s.velocity < 0.0, "only gravity acts");
    }

    #[test]
    fn ground_clamp_zeroes_velocity() {
        let mut s = FlightState::new(0.0);
        s.position = 0.001;
        s.velocity = -20.0;
        let r = step(&mut s, &params());
        assert!(r.grounded);
        assert_eq!(s.position, 0.0);
        assert_eq!(s.velocity, 0.0);
    }

    #[test]
    fn position_never_negative_while_idle_on_pad() {
        let mut s = FlightState::new(0.0);
        for _ in 0..120 {
            step(&mut s, &params());
            assert!(s.position >= 0.0);
        }
        assert_eq!(s.phase, FlightPhase::Flying, "tank still full");
    }

    #[test]
    fn thrust_accelerates_upward() {
        let mut s = FlightState::new(0.0);
        s.thrust = 100.0;
        step(&mut s, &params());
        assert!((s.velocity - 50.0 / 60.0).abs() < 1e-12);
        assert!(s.position > 0.0);
    }

    #[test]
    fn landing_fires_once_and_sets_record() {
        let mut s = FlightState::new(10.0);
        s.position = 200.0;
        s.velocity = 0.0;
        s.fuel = 0.0;
        let p = params();

        let first = step(&mut s, &p);
        let landing = first.landing.expect("terminal on first step");
        assert!(landing.new_record);
        assert_eq!(s.phase, FlightPhase::Landed);
        assert!(s.new_high_score);
        assert!((s.high_score - landing.position).abs() < 1e-12);

        let recorded = s.high_score;
        for _ in 0..600 {
            assert!(step(&mut s, &p).landing.is_none());
        }
        assert_eq!(s.high_score, recorded);
        assert_eq!(s.position, 0.0);
    }

    #[test]
    fn landing_below_record_keeps_record() {
        let mut s = FlightState::new(1_000.0);
        s.position = 50.0;
        s.fuel = 0.0;
        let r = step(&mut s, &params());
        assert_eq!(r.landing.map(|l| l.new_record), Some(false));
        assert_eq!(s.high_score, 1_000.0);
        assert!(!s.new_high_score);
    }

    #[test]
    fn burn_then_coast_lands_at_apogee_height() {
        let mut s = FlightState::new(0.0);
        s.fuel = 10.0;
        s.thrust = 100.0;
        let p = params();
        let mut apogee = 0.0_f64;
        let mut landing = None;
        for _ in 0..10_000 {
            let r = step(&mut s, &p);
            apogee = apogee.max(s.position);
            if r.landing.is_some() {
                landing = r.landing;
                break;
            }
        }
        let landing = landing.expect("flight must end");
        // The transition fires on the first step past the top of the arc.
        let gap = apogee - landing.position;
        assert!(gap >= 0.0 && gap <= p.gravity * p.dt * p.dt + 1e-9, "gap = {}", gap);
        assert_eq!(s.high_score, landing.position);
    }
}
