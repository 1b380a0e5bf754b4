use std::path::PathBuf;

use directories_next::ProjectDirs;

const SETTINGS_FILE: &str = "settings.toml";

/// Per-user configuration directory, if the platform has one.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fileops").map(|d| d.config_dir().to_path_buf())
}

/// Where the CLI looks for settings when `--config` is not given.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}
