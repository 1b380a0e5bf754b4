//! Path string helpers shared by the folder and file operations.
//!
//! Folder arguments are normalized to end with exactly one path separator
//! before use. The empty path is left alone so it can never turn into the
//! filesystem root.

use std::ffi::OsString;
use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Append a trailing separator to `folder` unless it already ends with one.
pub fn normalize_folder<P: AsRef<Path>>(folder: P) -> PathBuf {
    let raw = folder.as_ref().as_os_str();
    if raw.is_empty() || raw.to_string_lossy().ends_with(is_separator) {
        return PathBuf::from(raw);
    }
    let mut s = OsString::from(raw);
    s.push(MAIN_SEPARATOR_STR);
    PathBuf::from(s)
}

/// Path of `name` inside `folder`. An empty folder resolves to `name` alone.
pub fn in_folder<P: AsRef<Path>>(folder: P, name: impl AsRef<Path>) -> PathBuf {
    let folder = normalize_folder(folder);
    if folder.as_os_str().is_empty() {
        name.as_ref().to_path_buf()
    } else {
        folder.join(name)
    }
}

// Final path segment as a lossy string; empty for `..` or a bare root.
fn last_segment(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Text after the last `.` of the final segment, or empty if there is none.
///
/// ```
/// assert_eq!(fileops::fs_op::path::file_extension("a/b/report.final.csv"), "csv");
/// ```
pub fn file_extension<P: AsRef<Path>>(path: P) -> String {
    let seg = last_segment(path.as_ref());
    match seg.rfind('.') {
        Some(i) => seg[i + 1..].to_string(),
        None => String::new(),
    }
}

/// Final segment with its extension removed.
pub fn filename<P: AsRef<Path>>(path: P) -> String {
    let seg = last_segment(path.as_ref());
    match seg.rfind('.') {
        Some(i) => seg[..i].to_string(),
        None => seg,
    }
}
