use std::time::Duration;

/// Time spent squashing down, and again springing back
const PHASE: Duration = Duration::from_millis(100);
const SQUASHED_SCALE: f64 = 0.9;

/// Squash-and-release played on the mole when it gets hit.
///
/// Advanced by UI ticks, so it never holds up the game loop.
#[derive(Debug, Default)]
pub struct SquashAnimation {
    pub elapsed: Duration,
    pub is_active: bool,
}

impl SquashAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) from full size
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.is_active = true;
    }

    pub fn update(&mut self, dt: Duration) {
        if !self.is_active {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= PHASE * 2 {
            self.is_active = false;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Current scale of the sprite: 1.0 down to 0.9 and back
    pub fn scale(&self) -> f64 {
        if !self.is_active {
            return 1.0;
        }

        let phase = PHASE.as_secs_f64();
        let t = self.elapsed.as_secs_f64();
        let depth = 1.0 - SQUASHED_SCALE;
        if t < phase {
            1.0 - depth * (t / phase)
        } else {
            SQUASHED_SCALE + depth * ((t - phase) / phase)
        }
    }

    pub fn is_squashed(&self) -> bool {
        self.scale() < 1.0 - (1.0 - SQUASHED_SCALE) / 2.0
    }
}
