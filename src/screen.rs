use crate::{field::Placement, session::Outcome};

/// Display surface the game pushes state changes to.
///
/// The game never reads anything back; whatever sits behind this trait (the
/// terminal [`Board`](crate::board::Board), a test recorder) only renders.
pub trait Screen {
    fn show_hits(&mut self, hits: u32);
    fn show_failures(&mut self, failures: u32);
    fn show_remaining(&mut self, secs: u64);
    fn show_highscore(&mut self, highscore: u32);
    fn show_target(&mut self, placement: Placement);
    fn hide_target(&mut self);
    fn show_outcome(&mut self, outcome: Outcome);
    fn clear_outcome(&mut self);
    /// Kick off the squash/release played on a hit
    fn animate_tap(&mut self);
}
