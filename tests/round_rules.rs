use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};

use thwack::{
    audio::{AudioPlayer, Sound},
    field::{PlayArea, Placement},
    game::{Game, GameState},
    scheduler::TimerKind,
    screen::Screen,
    session::{Outcome, SessionConfig},
};

/// Screen double that keeps a log of everything pushed to it
#[derive(Debug, Default)]
struct Recorder {
    remaining: Vec<u64>,
    outcomes: Vec<Outcome>,
    highscores: Vec<u32>,
    targets: Vec<Placement>,
    hidden: usize,
}

impl Screen for Recorder {
    fn show_hits(&mut self, _hits: u32) {}
    fn show_failures(&mut self, _failures: u32) {}
    fn show_remaining(&mut self, secs: u64) {
        self.remaining.push(secs);
    }
    fn show_highscore(&mut self, highscore: u32) {
        self.highscores.push(highscore);
    }
    fn show_target(&mut self, placement: Placement) {
        self.targets.push(placement);
    }
    fn hide_target(&mut self) {
        self.hidden += 1;
    }
    fn show_outcome(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }
    fn clear_outcome(&mut self) {}
    fn animate_tap(&mut self) {}
}

#[derive(Debug, Default)]
struct Speaker(Vec<Sound>);

impl AudioPlayer for Speaker {
    fn play(&mut self, sound: Sound) {
        self.0.push(sound);
    }
}

fn game(config: SessionConfig) -> Game<Recorder, Speaker> {
    let mut game = Game::with_rng(
        config,
        Recorder::default(),
        Speaker::default(),
        StdRng::seed_from_u64(99),
    );
    game.resize(PlayArea::new(40, 12));
    game
}

/// Fire the one-shot end timer without letting any more moves happen first
fn time_out(game: &mut Game<Recorder, Speaker>) {
    let end = game
        .scheduler()
        .pending_timers()
        .into_iter()
        .find(|t| t.kind == TimerKind::EndOfSession)
        .expect("end timer is pending while running");
    game.dispatch(end);
}

/// Advance virtual time exactly to the next pending mover
fn step_to_next_move(game: &mut Game<Recorder, Speaker>) {
    let next = game
        .scheduler()
        .pending_timers()
        .into_iter()
        .find(|t| t.kind == TimerKind::Mover)
        .expect("a mover is always pending while running");
    let now = game.scheduler().now();
    game.advance(next.due - now);
}

#[test]
fn counters_match_taps_and_missed_moves() {
    let mut game = game(SessionConfig::default());
    game.start();
    game.advance(Duration::ZERO);
    // the opening move had nothing on screen to tap
    assert_eq!(game.session().failures, 1);

    // pattern per placement: tap twice, ignore, tap once, ignore, ignore
    let taps_per_placement = [2u32, 0, 1, 0, 0];
    let mut expected_hits = 0;
    let mut expected_failures = 1;
    for (i, taps) in taps_per_placement.iter().enumerate() {
        for _ in 0..*taps {
            game.tap();
        }
        expected_hits += taps;
        step_to_next_move(&mut game);
        if *taps == 0 {
            expected_failures += 1;
        }
        assert_eq!(game.session().hits, expected_hits, "after placement {i}");
        assert_eq!(game.session().failures, expected_failures, "after placement {i}");
    }

    // leave the rest of the round alone: every later move is a miss
    let end_due = game
        .scheduler()
        .pending_timers()
        .into_iter()
        .find(|t| t.kind == TimerKind::EndOfSession)
        .map(|t| t.due)
        .expect("end timer is pending while running");
    loop {
        let next = game
            .scheduler()
            .pending_timers()
            .into_iter()
            .find(|t| t.kind == TimerKind::Mover && t.due < end_due);
        let Some(next) = next else { break };
        let now = game.scheduler().now();
        game.advance(next.due - now);
        expected_failures += 1;
    }
    time_out(&mut game);

    assert_eq!(game.state(), GameState::Ended);
    assert_eq!(game.session().hits, 3);
    assert_eq!(game.session().failures, expected_failures);
}

#[test]
fn reset_twice_equals_reset_once() {
    let mut once = game(SessionConfig::default());
    once.start();
    once.advance(Duration::from_secs(3));
    once.tap();
    once.reset();

    let mut twice = game(SessionConfig::default());
    twice.start();
    twice.advance(Duration::from_secs(3));
    twice.tap();
    twice.reset();
    twice.reset();

    assert_eq!(once.session(), twice.session());
    assert_eq!(twice.session().hits, 0);
    assert_eq!(twice.session().failures, 0);
    assert_eq!(twice.session().remaining_secs, 20);
    assert!(twice.session().running);
    assert_eq!(twice.scheduler().pending(), 3);
}

#[test]
fn move_interval_decays_geometrically() {
    let config = SessionConfig::default();
    let base = config.base_move_interval.as_secs_f64();
    let decay = config.decay_factor;
    let mut game = game(config);
    game.start();
    game.advance(Duration::ZERO);

    for n in 1..=15 {
        let expected = base * decay.powi(n);
        let actual = game.session().move_interval.as_secs_f64();
        assert!(
            (actual - expected).abs() < 1e-6,
            "firing {n}: {actual} != {expected}"
        );
        assert!(game.session().move_interval > Duration::ZERO);
        step_to_next_move(&mut game);
    }
}

#[test]
fn victory_updates_highscore() {
    let mut game = game(SessionConfig::default());
    game.start();
    game.advance(Duration::ZERO);

    // five taps, then two placements left alone on top of the opening miss
    for _ in 0..5 {
        game.tap();
    }
    for _ in 0..3 {
        step_to_next_move(&mut game);
    }
    assert_eq!(game.session().hits, 5);
    assert_eq!(game.session().failures, 3);

    time_out(&mut game);

    assert_eq!(game.screen().outcomes, vec![Outcome::Victory]);
    assert_eq!(game.highscore(), 5);
    assert_eq!(game.screen().highscores.last(), Some(&5));
    assert_eq!(game.audio().0.last(), Some(&Sound::Victory));
}

#[test]
fn defeat_leaves_highscore_alone() {
    let mut game = game(SessionConfig::default());
    game.start();
    game.advance(Duration::ZERO);

    game.tap();
    game.tap();
    for _ in 0..4 {
        step_to_next_move(&mut game);
    }
    assert_eq!(game.session().hits, 2);
    assert_eq!(game.session().failures, 4);

    time_out(&mut game);

    assert_eq!(game.screen().outcomes, vec![Outcome::Defeat]);
    assert_eq!(game.highscore(), 0);
    assert_eq!(game.audio().0.last(), Some(&Sound::Defeat));
}

#[test]
fn clock_reaches_zero_and_round_ends_once() {
    let mut game = game(SessionConfig::default());
    game.start();

    game.advance(Duration::from_secs(19));
    assert_eq!(game.session().remaining_secs, 0);
    assert_eq!(game.state(), GameState::Running);
    assert!(game.screen().outcomes.is_empty());

    // the clock is due again at 20s too, but the end timer was posted first
    game.advance(Duration::from_secs(1));
    assert_eq!(game.state(), GameState::Ended);
    assert_eq!(game.screen().outcomes.len(), 1);

    game.advance(Duration::from_secs(30));
    assert_eq!(game.screen().outcomes.len(), 1);
    assert_eq!(game.session().remaining_secs, 0);
    // 20 on start, then one push per clock firing
    assert_eq!(game.screen().remaining.len(), 21);
    assert_eq!(game.screen().hidden, 1);
}

#[test]
fn stale_callbacks_after_reset_change_nothing() {
    let mut game = game(SessionConfig::default());
    game.start();
    game.advance(Duration::from_millis(1600));
    let in_flight = game.scheduler().pending_timers();
    assert!(!in_flight.is_empty());

    game.reset();
    for timer in in_flight {
        game.dispatch(timer);
    }

    assert_eq!(game.session().hits, 0);
    assert_eq!(game.session().failures, 0);
    assert_eq!(game.session().remaining_secs, 20);
    assert!(game.session().running);
}

#[test]
fn zero_play_area_pins_mole_to_origin() {
    let mut game = Game::with_rng(
        SessionConfig::default(),
        Recorder::default(),
        Speaker::default(),
        StdRng::seed_from_u64(1),
    );
    game.start();
    game.advance(Duration::from_secs(5));

    assert!(game
        .screen()
        .targets
        .iter()
        .all(|p| *p == Placement::new(0, 0)));
}
