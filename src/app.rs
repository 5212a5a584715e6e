use std::time::Duration;

use ratatui::layout::Rect;

use crate::{
    audio::AudioPlayer,
    board::Board,
    field::PlayArea,
    game::Game,
    session::SessionConfig,
};

/// Game wired to the terminal board, plus where on screen the play area sits
pub struct App {
    pub game: Game<Board, Box<dyn AudioPlayer>>,
    pub play_rect: Rect,
}

impl App {
    /// Build the app and start the first round straight away
    pub fn new(config: SessionConfig, audio: Box<dyn AudioPlayer>) -> Self {
        Self::from_game(Game::new(config, Board::new(), audio))
    }

    pub fn from_game(mut game: Game<Board, Box<dyn AudioPlayer>>) -> Self {
        game.start();
        Self {
            game,
            play_rect: Rect::default(),
        }
    }

    pub fn board(&self) -> &Board {
        self.game.screen()
    }

    /// Record where the play area was laid out and tell the game its size
    pub fn set_play_rect(&mut self, rect: Rect) {
        self.play_rect = rect;
        self.game.resize(PlayArea::new(rect.width, rect.height));
    }

    /// A mouse press at terminal cell (column, row). Returns true on a hit.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let rect = self.play_rect;
        if !rect.contains((column, row).into()) {
            return false;
        }

        let (x, y) = (column - rect.x, row - rect.y);
        if self.game.is_on_target(x, y) {
            self.game.tap();
            true
        } else {
            false
        }
    }

    /// Advance timers and animations by `elapsed` of wall-clock time
    pub fn on_tick(&mut self, elapsed: Duration) {
        self.game.advance(elapsed);
        self.game.screen_mut().update(elapsed);
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }
}
