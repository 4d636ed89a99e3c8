use std::time::Duration;

/// Ticks allowed in one catch-up burst after a stall
const MAX_CATCH_UP_STEPS: u32 = 4;

/// Fixed-rate ticker fed by elapsed monotonic time
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
}

impl FixedStep {
    pub fn from_hz(hz: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / hz.max(1),
            accumulator: Duration::ZERO,
        }
    }

    /// Add elapsed time and return how many ticks are due.
    ///
    /// Time beyond `MAX_CATCH_UP_STEPS` ticks is dropped so a long stall
    /// does not replay as a burst of physics.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let max_backlog = self.step * MAX_CATCH_UP_STEPS;
        self.accumulator = (self.accumulator + elapsed).min(max_backlog);

        let mut due = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            due += 1;
        }
        due
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }
}
