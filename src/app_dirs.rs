use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        if let Some(pd) = ProjectDirs::from("", "", "thwack") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("thwack_config.json")
        }
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("thwack");
            Some(state_dir.join("thwack.log"))
        } else {
            ProjectDirs::from("", "", "thwack")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("thwack.log"))
        }
    }
}
