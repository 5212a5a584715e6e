use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Env, Target};

/// Route `log` output to `path` so it never draws over the TUI.
///
/// `RUST_LOG` controls the filter, defaulting to `info`. Returns false (and
/// leaves logging disabled) when the file cannot be opened.
pub fn init(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .is_ok()
}
