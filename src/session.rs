use std::time::Duration;

/// Shortest delay the mover will ever be rescheduled with
pub const MIN_MOVE_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub duration: Duration,
    pub base_move_interval: Duration,
    pub decay_factor: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(20),
            base_move_interval: Duration::from_millis(1500),
            decay_factor: 0.95,
        }
    }
}

impl SessionConfig {
    pub fn duration_secs(&self) -> u64 {
        self.duration.as_secs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Counters for one round
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub hits: u32,
    pub failures: u32,
    pub remaining_secs: u64,
    pub move_interval: Duration,
    pub running: bool,
    /// A placement is on screen and has not been tapped yet
    pub awaiting_tap: bool,
}

impl Session {
    /// Fresh counters that are not running yet
    pub fn idle(config: &SessionConfig) -> Self {
        Self {
            hits: 0,
            failures: 0,
            remaining_secs: config.duration_secs(),
            move_interval: config.base_move_interval.max(MIN_MOVE_INTERVAL),
            running: false,
            awaiting_tap: false,
        }
    }

    /// Counters for a new round. The mole starts out untapped, so the first
    /// move of the round counts a miss unless it was tapped before moving.
    pub fn begin(config: &SessionConfig) -> Self {
        Self {
            running: true,
            awaiting_tap: true,
            ..Self::idle(config)
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
        self.awaiting_tap = false;
    }

    /// Account for the target moving on. Returns true when the previous
    /// placement was left untouched and counted as a failure.
    pub fn record_move(&mut self) -> bool {
        let missed = self.awaiting_tap;
        if missed {
            self.failures += 1;
        }
        self.awaiting_tap = true;
        missed
    }

    pub fn tick_clock(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    pub fn decay_interval(&mut self, factor: f64) {
        self.move_interval = self.move_interval.mul_f64(factor).max(MIN_MOVE_INTERVAL);
    }

    pub fn outcome(&self) -> Outcome {
        if self.hits > self.failures {
            Outcome::Victory
        } else {
            Outcome::Defeat
        }
    }
}
