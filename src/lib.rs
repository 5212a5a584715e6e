// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds the CLI and terminal setup on top.
pub mod animation;
pub mod app;
pub mod app_dirs;
pub mod audio;
pub mod board;
pub mod config;
pub mod field;
pub mod game;
pub mod logging;
pub mod runtime;
pub mod scheduler;
pub mod screen;
pub mod session;
pub mod ui;

pub use app::App;
