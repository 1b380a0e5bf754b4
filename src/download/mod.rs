//! HTTP file-download responders.
//!
//! [`download`] resolves `folder/name`, announces it as an attachment and
//! streams it into a [`ResponseWriter`]. A missing file is a recoverable
//! [`DownloadError::NotFound`]. [`download_as`] adds the optional removal of
//! the file afterwards, which is best-effort.

pub mod content_type;
pub mod error;
pub mod response;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use http::header::{HeaderName, HeaderValue, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, warn};

pub use content_type::{detect_mime, ContentType, MimeProbe, OCTET_STREAM};
pub use error::DownloadError;
pub use response::{ResponseBuffer, ResponseWriter};

use crate::fs_op::path::in_folder;

/// Which file the `delete` flag of [`download_as`] removes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteTarget {
    /// The bare `name` argument, as historically done. Misses the
    /// downloaded file whenever a folder is given.
    #[default]
    Name,
    /// The resolved `folder/name` path that was downloaded.
    Resolved,
}

/// Compatibility switches for the download responders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadOptions {
    pub mime_probe: MimeProbe,
    pub delete_target: DeleteTarget,
}

/// `folder/name`, or `name` alone when `folder` is empty.
pub fn resolve(name: &str, folder: &str) -> PathBuf {
    in_folder(folder, name)
}

fn header(name: HeaderName, value: String) -> Result<(HeaderName, HeaderValue), DownloadError> {
    match HeaderValue::from_str(&value) {
        Ok(v) => Ok((name, v)),
        Err(source) => Err(DownloadError::InvalidHeader { name, value, source }),
    }
}

/// Send `folder/name` as an attachment. Returns the number of body bytes.
pub fn download<W: ResponseWriter + ?Sized>(
    name: &str,
    folder: &str,
    content_type: &ContentType,
    options: &DownloadOptions,
    out: &mut W,
) -> Result<u64, DownloadError> {
    let resolved = resolve(name, folder);
    let len = match fs::metadata(&resolved) {
        Ok(md) if md.is_file() => md.len(),
        _ => return Err(DownloadError::NotFound(resolved)),
    };

    let mime = match content_type.mime() {
        Some(fixed) => fixed.to_string(),
        None => match options.mime_probe {
            MimeProbe::Folder => detect_mime(Path::new(folder)),
            MimeProbe::File => detect_mime(&resolved),
        },
    };
    let file_name = resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let headers = [
        header(CONTENT_TYPE, mime)?,
        header(CONTENT_DISPOSITION, format!("attachment; filename=\"{file_name}\""))?,
        (CONTENT_LENGTH, HeaderValue::from(len)),
    ];
    for (name, value) in headers {
        out.set_header(name, value);
    }

    let stream_err = |source: io::Error| DownloadError::Stream {
        path: resolved.clone(),
        source,
    };
    let mut file = File::open(&resolved).map_err(stream_err)?;
    let sent = io::copy(&mut file, out).map_err(stream_err)?;
    out.flush().map_err(stream_err)?;
    debug!(path = %resolved.display(), bytes = sent, "sent download");
    Ok(sent)
}

/// [`download`] with a fixed content type, optionally removing the file once
/// the response is written. The removal is unchecked.
pub fn download_as<W: ResponseWriter + ?Sized>(
    content_type: ContentType,
    name: &str,
    folder: &str,
    delete: bool,
    options: &DownloadOptions,
    out: &mut W,
) -> Result<u64, DownloadError> {
    let sent = download(name, folder, &content_type, options, out)?;
    if delete {
        let target = match options.delete_target {
            DeleteTarget::Name => PathBuf::from(name),
            DeleteTarget::Resolved => resolve(name, folder),
        };
        if let Err(e) = fs::remove_file(&target) {
            warn!(path = %target.display(), error = %e, "ignoring failed removal after download");
        }
    }
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolve_with_and_without_folder() {
        assert_eq!(resolve("a.csv", ""), PathBuf::from("a.csv"));
        assert_eq!(resolve("a.csv", "exports"), resolve("a.csv", "exports/"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let td = tempdir().unwrap();
        let folder = td.path().to_string_lossy().into_owned();
        let mut out = ResponseBuffer::new();
        let err = download("none.pdf", &folder, &ContentType::Pdf, &DownloadOptions::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, DownloadError::NotFound(p) if p.ends_with("none.pdf")));
        assert!(out.headers().is_empty());
    }

    #[test]
    fn directory_is_not_downloadable() {
        let td = tempdir().unwrap();
        let mut out = ResponseBuffer::new();
        let name = td.path().to_string_lossy().into_owned();
        let err = download(&name, "", &ContentType::Zip, &DownloadOptions::default(), &mut out).unwrap_err();
        assert!(matches!(err, DownloadError::NotFound(_)));
    }

    #[test]
    fn quote_in_name_is_kept() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("we\"ird.txt"), b"x").unwrap();
        let folder = td.path().to_string_lossy().into_owned();
        let mut out = ResponseBuffer::new();
        download("we\"ird.txt", &folder, &ContentType::Csv, &DownloadOptions::default(), &mut out).unwrap();
        assert_eq!(
            out.header_str(CONTENT_DISPOSITION),
            Some("attachment; filename=\"we\"ird.txt\"")
        );
    }

    #[test]
    fn control_chars_in_name_are_rejected() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("bad\nname"), b"x").unwrap();
        let folder = td.path().to_string_lossy().into_owned();
        let mut out = ResponseBuffer::new();
        let err = download("bad\nname", &folder, &ContentType::Csv, &DownloadOptions::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, DownloadError::InvalidHeader { .. }));
    }
}
