use std::time::Duration;

/// Fixed-step accumulator: turns irregular frame times into a whole number
/// of simulation ticks.
#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f64,
    acc: f64,
    max_steps: u32,
}

impl FixedStep {
    pub fn new(dt: f64, max_steps: u32) -> Self {
        Self { dt, acc: 0.0, max_steps: max_steps.max(1) }
    }

    /// Ticks owed for `elapsed` wall time. Time beyond `max_steps` ticks is
    /// dropped so a stalled frame cannot snowball.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.acc += elapsed.as_secs_f64();
        let mut steps = 0;
        while self.acc >= self.dt && steps < self.max_steps {
            self.acc -= self.dt;
            steps += 1;
        }
        if steps == self.max_steps {
            self.acc = self.acc.min(self.dt);
        }
        steps
    }

    /// Wall time until the next tick is due.
    pub fn until_next(&self) -> Duration {
        Duration::from_secs_f64((self.dt - self.acc).max(0.0))
    }
}
