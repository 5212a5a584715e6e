use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::{Duration, Instant},
};
use thwack::{
    app_dirs::AppDirs,
    audio::{AudioPlayer, Silent, TerminalBell},
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
    ui, App,
};

const TICK_RATE_MS: u64 = 50;

/// whack-a-mole in your terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Whack-a-mole in your terminal. Click the mole before it moves; every move it survives counts as a miss. Finish the round with more hits than misses to win."
)]
pub struct Cli {
    /// length of a round in seconds
    #[clap(short = 'd', long, value_parser = clap::value_parser!(u64).range(1..))]
    duration: Option<u64>,

    /// milliseconds the mole waits before its first move
    #[clap(short = 'i', long, value_parser = clap::value_parser!(u64).range(1..))]
    interval: Option<u64>,

    /// factor the move interval is multiplied by after every move, between 0 and 1
    #[clap(long, value_parser = parse_decay)]
    decay: Option<f64>,

    /// disable the terminal bell sound effects
    #[clap(long)]
    mute: bool,

    /// write the resulting settings to the config file
    #[clap(long)]
    save_config: bool,
}

fn parse_decay(s: &str) -> Result<f64, String> {
    let decay: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if decay > 0.0 && decay < 1.0 {
        Ok(decay)
    } else {
        Err(format!("{decay} is not between 0 and 1"))
    }
}

impl Cli {
    /// Layer command line overrides on top of the stored config
    fn apply(&self, mut config: Config) -> Config {
        if let Some(d) = self.duration {
            config.duration_secs = d;
        }
        if let Some(i) = self.interval {
            config.move_interval_ms = i;
        }
        if let Some(decay) = self.decay {
            config.decay_factor = decay;
        }
        if self.mute {
            config.mute = true;
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Reset,
    Quit,
}

fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        // ctrl+c to quit
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = AppDirs::log_path() {
        logging::init(&path);
    }

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    if let Err(e) = config.validate() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::ValueValidation, e).exit();
    }
    if cli.save_config {
        store.save(&config)?;
        info!("saved settings to {}", store.path().display());
    }

    let audio: Box<dyn AudioPlayer> = if config.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::stdout())
    };

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.session_config(), audio);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let mut last = Instant::now();

    loop {
        terminal.draw(|f| ui(app, f))?;

        let event = runner.step();

        // catch timers up before handling input so clicks hit the current placement
        let now = Instant::now();
        app.on_tick(now - last);
        last = now;

        match event {
            GameEvent::Tick | GameEvent::Resize => {}
            GameEvent::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    app.click(mouse.column, mouse.row);
                }
            }
            GameEvent::Key(key) => match key_action(key) {
                Some(Action::Quit) => break,
                Some(Action::Reset) => app.reset(),
                None => {}
            },
        }
    }

    info!("quitting, highscore {}", app.game.highscore());
    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    app.set_play_rect(ui::layout(f.area()).play);
    f.render_widget(&*app, f.area());
}
