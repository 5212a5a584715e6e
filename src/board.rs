use std::time::Duration;

use crate::{
    animation::SquashAnimation, field::Placement, screen::Screen, session::Outcome,
};

/// What the terminal shows: the last values the game pushed, ready to render.
#[derive(Debug, Default)]
pub struct Board {
    pub hits: u32,
    pub failures: u32,
    pub remaining_secs: u64,
    pub highscore: u32,
    pub target: Option<Placement>,
    pub outcome: Option<Outcome>,
    pub squash: SquashAnimation,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance animations by `dt`
    pub fn update(&mut self, dt: Duration) {
        self.squash.update(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.squash.is_active
    }
}

impl Screen for Board {
    fn show_hits(&mut self, hits: u32) {
        self.hits = hits;
    }

    fn show_failures(&mut self, failures: u32) {
        self.failures = failures;
    }

    fn show_remaining(&mut self, secs: u64) {
        self.remaining_secs = secs;
    }

    fn show_highscore(&mut self, highscore: u32) {
        self.highscore = highscore;
    }

    fn show_target(&mut self, placement: Placement) {
        self.target = Some(placement);
    }

    fn hide_target(&mut self) {
        self.target = None;
        self.squash = SquashAnimation::new();
    }

    fn show_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    fn clear_outcome(&mut self) {
        self.outcome = None;
    }

    fn animate_tap(&mut self) {
        self.squash.start();
    }
}
