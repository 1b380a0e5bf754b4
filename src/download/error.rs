use std::io;
use std::path::PathBuf;

use http::header::{HeaderName, InvalidHeaderValue};
use thiserror::Error;

/// Failures of the download responders.
///
/// Unlike [`crate::fs_op::FsOpError`] these are meant to be handled by the
/// caller; nothing in the crate turns them into a process exit.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid value for header {name}: {value:?}")]
    InvalidHeader {
        name: HeaderName,
        value: String,
        #[source]
        source: InvalidHeaderValue,
    },

    #[error("failed to stream `{}`: {source}", .path.display())]
    Stream {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
