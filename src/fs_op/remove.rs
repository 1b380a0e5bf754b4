use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::fs_op::error::{FsOpError, Op};
use crate::fs_op::path::normalize_folder;
use crate::fs_op::stat::is_dir;

/// Remove the empty folder at `path`. Does nothing when `path` is not a
/// directory.
pub fn delete_folder<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let folder = normalize_folder(path);
    if !is_dir(&folder) {
        return Ok(());
    }
    fs::remove_dir(&folder).map_err(|e| FsOpError::io(Op::DeleteFolder, &folder, e))?;
    debug!(path = %folder.display(), "deleted folder");
    Ok(())
}

/// Remove the folder at `path` together with everything below it.
///
/// The walk is post-order and iterative, so depth never grows the call
/// stack. Files are unlinked best-effort: a failed unlink is only logged.
/// Every directory removal, the root included, is checked and fails the
/// operation. Symlinks are unlinked, never followed.
pub fn delete_tree<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let root = normalize_folder(path);
    if !is_dir(&root) {
        return Ok(());
    }

    for entry in WalkDir::new(&root).contents_first(true).follow_links(false) {
        let entry = entry.map_err(|e| {
            let at = e.path().unwrap_or(root.as_path()).to_path_buf();
            FsOpError::io(Op::DeleteTree, &at, e.into())
        })?;
        let p = entry.path();
        if entry.file_type().is_dir() {
            fs::remove_dir(p).map_err(|e| FsOpError::io(Op::DeleteTree, p, e))?;
        } else {
            unlink_best_effort(p);
        }
    }
    debug!(path = %root.display(), "deleted tree");
    Ok(())
}

// Logged only. A file that survives makes its parent's removal fail.
fn unlink_best_effort(p: &Path) {
    if let Err(e) = fs::remove_file(p) {
        warn!(path = %p.display(), error = %e, "ignoring failed unlink");
    }
}
