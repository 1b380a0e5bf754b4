use std::path::Path;

use serde::Deserialize;
use tracing::debug;

/// Fallback when detection yields nothing.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type announced by a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    /// Sniff the type, see [`MimeProbe`] for which path is probed.
    Detect,
    Csv,
    Excel,
    Json,
    Pdf,
    Zip,
    Custom(String),
}

impl ContentType {
    /// The fixed MIME string, or `None` for [`ContentType::Detect`].
    pub fn mime(&self) -> Option<&str> {
        match self {
            ContentType::Detect => None,
            ContentType::Csv => Some("text/csv"),
            ContentType::Excel => Some("application/vnd.ms-excel"),
            ContentType::Json => Some("application/json"),
            ContentType::Pdf => Some("application/pdf"),
            ContentType::Zip => Some("application/zip"),
            ContentType::Custom(s) => Some(s.as_str()),
        }
    }
}

/// Which path `ContentType::Detect` inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MimeProbe {
    /// The folder argument, as historically done. Usually yields the
    /// fallback type.
    #[default]
    Folder,
    /// The resolved file.
    File,
}

/// Best-guess MIME type of `probe` from its leading bytes.
pub fn detect_mime(probe: &Path) -> String {
    match infer::get_from_path(probe) {
        Ok(Some(kind)) => kind.mime_type().to_string(),
        Ok(None) => OCTET_STREAM.to_string(),
        Err(e) => {
            debug!(probe = %probe.display(), error = %e, "mime detection failed");
            OCTET_STREAM.to_string()
        }
    }
}
