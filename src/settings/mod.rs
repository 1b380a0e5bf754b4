pub mod config_dirs;
pub mod read_settings;

use std::path::PathBuf;

use serde::Deserialize;

use crate::download::{DeleteTarget, DownloadOptions, MimeProbe};
use crate::fs_op::archive::ZIP_FOLDER_MODE;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_settings_path, project_config_dir};
pub use read_settings::{load_settings, parse_settings, SettingsError};

/// Defaults and compatibility switches for [`crate::FileOps`].
///
/// Every field is optional in the TOML file; missing ones take the value
/// from `Settings::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode for folders created by the CLI and uploads.
    pub folder_mode: u32,
    /// Mode applied to files stored by `move_uploaded_file`.
    pub file_mode: u32,
    /// Mode for the target folder `create_zip` creates.
    pub zip_folder_mode: u32,
    pub mime_probe: MimeProbe,
    pub delete_target: DeleteTarget,
    /// `EnvFilter` directive used when `FILEOPS_LOG` is unset.
    pub log_level: String,
    /// Write logs here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            folder_mode: 0o755,
            file_mode: 0o644,
            zip_folder_mode: ZIP_FOLDER_MODE,
            mime_probe: MimeProbe::default(),
            delete_target: DeleteTarget::default(),
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn download_options(&self) -> DownloadOptions {
        DownloadOptions {
            mime_probe: self.mime_probe,
            delete_target: self.delete_target,
        }
    }
}
