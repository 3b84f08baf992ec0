use std::time::Duration;

use tracing::{debug, info};

use super::clock::FixedStep;
use super::event::{EventMonitor, FlightEvent};
use super::telemetry::Telemetry;
use crate::config::SimConfig;
use crate::control::{PointerEvent, ThrustSlider};
use crate::dynamics::{self, FlightState, StepParams};

// ---------------------------------------------------------------------------
// Main loop state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Operator commands other than pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Escape, window close or quit signal.
    Quit,
    /// Space: back to the pad, keep the record.
    Reset,
}

/// Owns everything the frame loop mutates: flight state, pacing clock,
/// event detectors and telemetry.
pub struct Session {
    state: FlightState,
    params: StepParams,
    loop_state: LoopState,
    clock: FixedStep,
    monitor: EventMonitor,
    telemetry: Telemetry,
}

impl Session {
    pub fn new(config: &SimConfig, high_score: f64) -> Self {
        Self {
            state: FlightState::new(high_score),
            params: StepParams::from(config),
            loop_state: LoopState::Running,
            clock: FixedStep::new(config.dt(), config.max_catch_up_steps),
            monitor: EventMonitor::default(),
            telemetry: Telemetry::new(config.telemetry_capacity),
        }
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    /// Value written back to the high-score file at shutdown.
    pub fn score_to_persist(&self) -> f64 {
        self.state.high_score
    }

    pub fn pointer(&mut self, slider: &ThrustSlider, event: PointerEvent) {
        if self.is_running() {
            slider.handle(&mut self.state, event);
        }
    }

    pub fn command(&mut self, command: Command) {
        if !self.is_running() {
            return;
        }
        match command {
            Command::Quit => {
                info!(
                    position = self.state.position,
                    high_score = self.state.high_score,
                    "quit requested"
                );
                self.loop_state = LoopState::Terminated;
            }
            Command::Reset => {
                info!(high_score = self.state.high_score, "flight reset");
                self.state.reset();
                self.telemetry.clear();
            }
        }
    }

    /// One physics step. No-op once terminated.
    pub fn tick(&mut self) -> Vec<FlightEvent> {
        if !self.is_running() {
            return Vec::new();
        }
        let prev = self.state.clone();
        let report = dynamics::step(&mut self.state, &self.params);
        self.telemetry.record(&self.state);

        let events = self.monitor.check(&prev, &self.state);
        for e in &events {
            debug!(
                event = e.kind.label(),
                t = e.time,
                position = e.position,
                velocity = e.velocity,
                "flight event"
            );
        }
        if let Some(landing) = report.landing {
            if landing.new_record {
                info!(position = landing.position, "landed: new high score");
            } else {
                info!(
                    position = landing.position,
                    high_score = self.state.high_score,
                    "landed"
                );
            }
        }
        events
    }

    /// Run every tick owed for `elapsed` wall time; returns the tick count.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let steps = self.clock.advance(elapsed);
        for _ in 0..steps {
            self.tick();
        }
        steps
    }

    pub fn until_next_tick(&self) -> Duration {
        self.clock.until_next()
    }
}
