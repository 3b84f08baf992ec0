use super::event::{EventMonitor, FlightEvent};
use super::telemetry::Sample;
use crate::config::SimConfig;
use crate::control::ThrottleProgram;
use crate::dynamics::{self, FlightPhase, FlightState, Landing, StepParams};

/// Result of a headless flight.
#[derive(Debug, Clone)]
pub struct Flight {
    pub program: String,
    pub samples: Vec<Sample>,
    pub events: Vec<FlightEvent>,
    pub landing: Option<Landing>,
    pub final_state: FlightState,
}

impl Flight {
    pub fn apogee(&self) -> f64 {
        self.samples.iter().map(|s| s.position).fold(0.0_f64, f64::max)
    }

    pub fn max_speed(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.velocity.abs())
            .fold(0.0_f64, f64::max)
    }

    pub fn flight_time(&self) -> f64 {
        self.final_state.time
    }
}

// ---------------------------------------------------------------------------
// Headless flight under a throttle program
// ---------------------------------------------------------------------------

/// Fly from the pad until the rocket is back on the ground after landing,
/// or until `max_time` seconds of simulated time.
pub fn fly_with(
    config: &SimConfig,
    program: &mut dyn ThrottleProgram,
    high_score: f64,
    max_time: f64,
) -> Flight {
    let params = StepParams::from(config);
    let mut state = FlightState::new(high_score);
    let mut monitor = EventMonitor::default();

    let capacity = ((max_time / params.dt) as usize + 1).min(200_000);
    let mut samples = Vec::with_capacity(capacity);
    let mut events = Vec::new();
    let mut landing = None;

    samples.push(Sample::from(&state));
    program.reset();

    while state.time < max_time {
        let cmd = program.throttle(&state, params.dt);
        state.set_thrust(cmd);

        let prev = state.clone();
        let report = dynamics::step(&mut state, &params);
        events.extend(monitor.check(&prev, &state));
        samples.push(Sample::from(&state));

        if report.landing.is_some() {
            landing = report.landing;
        }
        if state.phase == FlightPhase::Landed && state.position == 0.0 {
            break;
        }
    }

    Flight {
        program: program.name().to_string(),
        samples,
        events,
        landing,
        final_state: state,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{presets, ConstantThrottle, Hover};
    use crate::sim::event::EventKind;

    #[test]
    fn full_burn_reaches_analytic_apogee() {
        let config = SimConfig::default();
        let mut program = presets::full_burn();
        let flight = fly_with(&config, &mut program, 0.0, 300.0);
        // 20 s at net +50 then coast against 50: 10 000 + 10 000
        let apogee = flight.apogee();
        assert!((apogee - 20_000.0).abs() < 50.0, "apogee = {}", apogee);
        let landing = flight.landing.expect("must land");
        assert!(landing.new_record);
        assert_eq!(flight.final_state.position, 0.0);
    }

    #[test]
    fn events_in_order() {
        let config = SimConfig::default();
        let mut program = presets::short_hop();
        let flight = fly_with(&config, &mut program, 0.0, 300.0);
        let kinds: Vec<_> = flight.events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds.first(), Some(&EventKind::Liftoff));
        assert_eq!(kinds.last(), Some(&EventKind::Touchdown));
        assert!(kinds.contains(&EventKind::Apogee));
    }

    #[test]
    fn idle_rocket_never_lands() {
        let config = SimConfig::default();
        let mut program = ConstantThrottle { thrust: 0.0 };
        let flight = fly_with(&config, &mut program, 5.0, 2.0);
        assert!(flight.landing.is_none());
        assert_eq!(flight.apogee(), 0.0);
        assert_eq!(flight.final_state.fuel, 100.0);
        assert_eq!(flight.final_state.high_score, 5.0);
    }

    #[test]
    fn invariants_hold_every_sample() {
        let config = SimConfig::default();
        let mut program = Hover::new(300.0, config.gravity);
        let flight = fly_with(&config, &mut program, 0.0, 120.0);
        let mut prev_fuel = 100.0;
        for s in &flight.samples {
            assert!(s.position >= 0.0);
            assert!((0.0..=100.0).contains(&s.fuel));
            assert!((0.0..=100.0).contains(&s.thrust));
            assert!(s.fuel <= prev_fuel);
            prev_fuel = s.fuel;
        }
    }
}
