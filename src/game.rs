use std::time::Duration;

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    audio::{AudioPlayer, Sound},
    field::{PlayArea, Placement, SPRITE},
    scheduler::{Scheduler, Timer, TimerKind},
    screen::Screen,
    session::{Outcome, Session, SessionConfig},
};

const CLOCK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Idle,
    Running,
    Ended,
}

/// Session controller: owns the round, its timers and the highscore, and
/// pushes every change out to the screen and audio collaborators.
pub struct Game<S: Screen, A: AudioPlayer> {
    config: SessionConfig,
    session: Session,
    state: GameState,
    highscore: u32,
    last_outcome: Option<Outcome>,
    placement: Placement,
    play_area: PlayArea,
    scheduler: Scheduler,
    rng: StdRng,
    screen: S,
    audio: A,
}

impl<S: Screen, A: AudioPlayer> Game<S, A> {
    pub fn new(config: SessionConfig, screen: S, audio: A) -> Self {
        Self::with_rng(config, screen, audio, StdRng::from_entropy())
    }

    pub fn with_rng(config: SessionConfig, screen: S, audio: A, rng: StdRng) -> Self {
        Self {
            session: Session::idle(&config),
            config,
            state: GameState::Idle,
            highscore: 0,
            last_outcome: None,
            placement: Placement::default(),
            play_area: PlayArea::default(),
            scheduler: Scheduler::new(),
            rng,
            screen,
            audio,
        }
    }

    /// Begin a fresh round. Anything still queued from a previous round is
    /// cancelled first, so only one set of round timers is ever pending.
    pub fn start(&mut self) {
        self.scheduler.cancel_all();
        self.session = Session::begin(&self.config);
        self.state = GameState::Running;
        self.last_outcome = None;

        self.screen.show_hits(self.session.hits);
        self.screen.show_failures(self.session.failures);
        self.screen.show_remaining(self.session.remaining_secs);
        self.screen.show_highscore(self.highscore);
        self.screen.clear_outcome();
        self.screen.show_target(self.placement);

        self.scheduler.post(TimerKind::Mover, Duration::ZERO);
        self.scheduler.post(TimerKind::Clock, Duration::ZERO);
        self.scheduler.post(TimerKind::EndOfSession, self.config.duration);

        info!(
            "round started: {}s, move interval {:?}, decay {}",
            self.config.duration_secs(),
            self.config.base_move_interval,
            self.config.decay_factor
        );
    }

    /// Throw away every pending timer and start a fresh round
    pub fn reset(&mut self) {
        info!("round reset");
        self.start();
    }

    pub fn end(&mut self) {
        if !self.session.running {
            return;
        }
        // flipped first so anything still queued behind us is a no-op
        self.session.running = false;
        self.state = GameState::Ended;

        self.screen.hide_target();
        self.screen.show_hits(self.session.hits);
        self.screen.show_failures(self.session.failures);

        let outcome = self.session.outcome();
        self.screen.show_outcome(outcome);
        match outcome {
            Outcome::Victory => {
                self.audio.play(Sound::Victory);
                if self.session.hits > self.highscore {
                    self.highscore = self.session.hits;
                    info!("new highscore: {}", self.highscore);
                }
            }
            Outcome::Defeat => self.audio.play(Sound::Defeat),
        }
        self.screen.show_highscore(self.highscore);
        self.last_outcome = Some(outcome);

        info!(
            "round ended: {outcome}, {} hits / {} misses",
            self.session.hits, self.session.failures
        );
    }

    /// Input handler for a tap on the mole
    pub fn tap(&mut self) {
        if !self.session.running {
            return;
        }

        self.session.record_hit();
        self.screen.show_hits(self.session.hits);
        self.audio.play(Sound::Tap);
        self.screen.animate_tap();
        debug!("hit #{}", self.session.hits);
    }

    /// Move virtual time forward by `elapsed`, firing everything that comes due
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now().saturating_add(elapsed);
        while let Some(timer) = self.scheduler.pop_due(until) {
            self.dispatch(timer);
        }
        self.scheduler.settle(until);
    }

    /// Run a single timer. Timers cancelled by a reset are ignored.
    pub fn dispatch(&mut self, timer: Timer) {
        if !self.scheduler.is_current(&timer) {
            debug!("dropping stale {:?} timer", timer.kind);
            return;
        }

        match timer.kind {
            TimerKind::Mover => self.on_mover(),
            TimerKind::Clock => self.on_clock(),
            TimerKind::EndOfSession => self.end(),
        }
    }

    fn on_mover(&mut self) {
        if !self.session.running {
            return;
        }

        if self.session.record_move() {
            self.screen.show_failures(self.session.failures);
            debug!("missed, {} failures", self.session.failures);
        }

        self.placement = Placement::random(self.play_area, SPRITE, &mut self.rng);
        self.screen.show_target(self.placement);

        // reschedule with the current interval, then tighten it for next time
        self.scheduler.post(TimerKind::Mover, self.session.move_interval);
        self.session.decay_interval(self.config.decay_factor);
    }

    fn on_clock(&mut self) {
        if !self.session.running {
            return;
        }

        self.session.tick_clock();
        self.screen.show_remaining(self.session.remaining_secs);
        self.scheduler.post(TimerKind::Clock, CLOCK_PERIOD);
    }

    /// The play area changed size; keep the mole inside it
    pub fn resize(&mut self, area: PlayArea) {
        if area == self.play_area {
            return;
        }
        debug!("play area resized to {}x{}", area.width, area.height);
        self.play_area = area;
        self.placement = self.placement.clamped(area, SPRITE);
        if self.session.running {
            self.screen.show_target(self.placement);
        }
    }

    /// Whether a click at (x, y), relative to the play area, lands on the mole
    pub fn is_on_target(&self, x: u16, y: u16) -> bool {
        self.session.running && self.placement.contains(SPRITE, x, y)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn play_area(&self) -> PlayArea {
        self.play_area
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
