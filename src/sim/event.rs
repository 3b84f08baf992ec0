use crate::dynamics::FlightState;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Liftoff,
    Burnout,
    Apogee,
    Touchdown,
}

impl EventKind {
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Liftoff => "LIFTOFF",
            EventKind::Burnout => "BURNOUT",
            EventKind::Apogee => "APOGEE",
            EventKind::Touchdown => "TOUCHDOWN",
        }
    }
}

/// A discrete event, stamped with the state it was detected in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightEvent {
    pub time: f64,
    pub kind: EventKind,
    pub position: f64,
    pub velocity: f64,
}

/// Passive detector over consecutive states.
pub trait EventDetector {
    fn check(&mut self, prev: &FlightState, current: &FlightState) -> Option<EventKind>;
}

/// Leaves the ground.
pub struct LiftoffDetector;

impl EventDetector for LiftoffDetector {
    fn check(&mut self, prev: &FlightState, current: &FlightState) -> Option<EventKind> {
        (prev.position == 0.0 && current.position > 0.0).then_some(EventKind::Liftoff)
    }
}

/// Tank runs dry.
pub struct BurnoutDetector;

impl EventDetector for BurnoutDetector {
    fn check(&mut self, prev: &FlightState, current: &FlightState) -> Option<EventKind> {
        (prev.fuel > 0.0 && current.fuel == 0.0).then_some(EventKind::Burnout)
    }
}

/// Vertical velocity turns from climbing to falling above the ground.
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: &FlightState, current: &FlightState) -> Option<EventKind> {
        if prev.velocity > 0.0 && current.velocity <= 0.0 && current.position > 0.0 {
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}

/// Comes back down onto the ground.
pub struct TouchdownDetector;

impl EventDetector for TouchdownDetector {
    fn check(&mut self, prev: &FlightState, current: &FlightState) -> Option<EventKind> {
        (prev.position > 0.0 && current.position == 0.0).then_some(EventKind::Touchdown)
    }
}

// ---------------------------------------------------------------------------
// Detector set
// ---------------------------------------------------------------------------

pub struct EventMonitor {
    detectors: Vec<Box<dyn EventDetector>>,
}

impl Default for EventMonitor {
    fn default() -> Self {
        Self {
            detectors: vec![
                Box::new(LiftoffDetector),
                Box::new(BurnoutDetector),
                Box::new(ApogeeDetector),
                Box::new(TouchdownDetector),
            ],
        }
    }
}

impl EventMonitor {
    pub fn with_detectors(detectors: Vec<Box<dyn EventDetector>>) -> Self {
        Self { detectors }
    }

    pub fn check(&mut self, prev: &FlightState, current: &FlightState) -> Vec<FlightEvent> {
        self.detectors
            .iter_mut()
            .filter_map(|d| d.check(prev, current))
            .map(|kind| FlightEvent {
                time: current.time,
                kind,
                position: current.position,
                velocity: current.velocity,
            })
            .collect()
    }
}
