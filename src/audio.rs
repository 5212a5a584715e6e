use std::io::{self, Write};

use log::{debug, warn};

/// Logical sound effects the game asks for
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, strum_macros::Display)]
pub enum Sound {
    Tap,
    Victory,
    Defeat,
}

/// Fire-and-forget sound playback. Callers never learn whether it played.
pub trait AudioPlayer {
    fn play(&mut self, sound: Sound);
}

impl<A: AudioPlayer + ?Sized> AudioPlayer for Box<A> {
    fn play(&mut self, sound: Sound) {
        (**self).play(sound)
    }
}

/// Plays sounds as terminal bells. Victory rings twice.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rings(sound: Sound) -> usize {
        match sound {
            Sound::Tap | Sound::Defeat => 1,
            Sound::Victory => 2,
        }
    }
}

impl<W: Write> AudioPlayer for TerminalBell<W> {
    fn play(&mut self, sound: Sound) {
        debug!("playing {sound}");
        let bells = "\x07".repeat(Self::rings(sound));
        if let Err(e) = self
            .out
            .write_all(bells.as_bytes())
            .and_then(|_| self.out.flush())
        {
            warn!("failed to ring terminal bell for {sound}: {e}");
        }
    }
}

/// Used with `--mute`
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioPlayer for Silent {
    fn play(&mut self, sound: Sound) {
        debug!("muted {sound}");
    }
}
