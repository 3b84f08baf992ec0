use std::collections::VecDeque;

use crate::dynamics::FlightState;

/// One row of flight history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
    pub thrust: f64,
    pub fuel: f64,
}

impl From<&FlightState> for Sample {
    fn from(s: &FlightState) -> Self {
        Self {
            time: s.time,
            position: s.position,
            velocity: s.velocity,
            thrust: s.thrust,
            fuel: s.fuel,
        }
    }
}

/// Bounded history; the oldest samples drop off once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct Telemetry {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl Telemetry {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity.min(100_000)),
            capacity,
        }
    }

    pub fn record(&mut self, state: &FlightState) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample::from(state));
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut t = Telemetry::new(3);
        let mut s = FlightState::new(0.0);
        for i in 0..5 {
            s.time = i as f64;
            t.record(&s);
        }
        assert_eq!(t.len(), 3);
        let times: Vec<f64> = t.iter().map(|x| x.time).collect();
        assert_eq!(times, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_capacity_still_holds_latest() {
        let mut t = Telemetry::new(0);
        t.record(&FlightState::new(0.0));
        t.record(&FlightState::new(0.0));
        assert_eq!(t.len(), 1);
    }
}
