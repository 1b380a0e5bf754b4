use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::fs_op::error::{FsOpError, Op};
use crate::fs_op::path::normalize_folder;
use crate::fs_op::stat::is_dir;

/// Ordering applied to a folder listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
    /// Directory order as returned by the OS.
    #[serde(rename = "none")]
    Unsorted,
}

/// List the entries of `path`, including `.` and `..`.
///
/// Returns `Ok(None)` when `path` is not a directory. Names are compared
/// bytewise, so descending is the exact reverse of ascending.
///
/// Names are converted lossily: bytes that are not valid UTF-8 become
/// U+FFFD, and such an entry cannot be fed back into another operation.
pub fn list_folder<P: AsRef<Path>>(
    path: P,
    order: SortOrder,
) -> Result<Option<Vec<String>>, FsOpError> {
    let folder = normalize_folder(path);
    if !is_dir(&folder) {
        return Ok(None);
    }

    let listing_err = |e: std::io::Error| FsOpError::io(Op::ReadFolder, &folder, e);
    let mut names = vec![".".to_string(), "..".to_string()];
    for entry in fs::read_dir(&folder).map_err(listing_err)? {
        let entry = entry.map_err(listing_err)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    match order {
        SortOrder::Ascending => names.sort_unstable(),
        SortOrder::Descending => names.sort_unstable_by(|a, b| b.cmp(a)),
        SortOrder::Unsorted => {}
    }
    debug!(path = %folder.display(), entries = names.len(), ?order, "listed folder");
    Ok(Some(names))
}
