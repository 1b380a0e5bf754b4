use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fs_op::error::{FsOpError, Op};
use crate::fs_op::path::normalize_folder;
use crate::fs_op::stat::is_dir;

/// Create the folder at `path` with permission bits `mode`.
///
/// Returns the normalized folder path. An existing directory is left as is,
/// so calling this twice is harmless. With `recursive` missing parents are
/// created too. On non-Unix targets `mode` is ignored.
pub fn create_folder<P: AsRef<Path>>(
    path: P,
    mode: u32,
    recursive: bool,
) -> Result<PathBuf, FsOpError> {
    let raw = path.as_ref();
    if raw.as_os_str().is_empty() {
        return Err(FsOpError::EmptyPath {
            op: Op::CreateFolder,
        });
    }
    let folder = normalize_folder(raw);
    if is_dir(&folder) {
        debug!(path = %folder.display(), "folder already exists");
        return Ok(folder);
    }

    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(&folder)
        .map_err(|e| FsOpError::io(Op::CreateFolder, &folder, e))?;
    debug!(path = %folder.display(), mode = %format!("{mode:o}"), recursive, "created folder");
    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_when_recursive() {
        let td = tempdir().unwrap();
        let dir = td.path().join("a/b/c");
        let made = create_folder(&dir, 0o755, true).unwrap();
        assert!(dir.is_dir());
        assert_eq!(made, normalize_folder(&dir));
    }

    #[test]
    fn non_recursive_fails_without_parent() {
        let td = tempdir().unwrap();
        let dir = td.path().join("missing/child");
        let err = create_folder(&dir, 0o755, false).unwrap_err();
        assert_eq!(err.op(), Op::CreateFolder);
        assert!(!dir.exists());
    }

    #[test]
    fn idempotent() {
        let td = tempdir().unwrap();
        let dir = td.path().join("once");
        create_folder(&dir, 0o755, false).unwrap();
        create_folder(&dir, 0o755, false).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            create_folder("", 0o755, true),
            Err(FsOpError::EmptyPath { op: Op::CreateFolder })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn applies_mode_bits() {
        use std::os::unix::fs::PermissionsExt;
        let td = tempdir().unwrap();
        let dir = td.path().join("private");
        create_folder(&dir, 0o700, false).unwrap();
        let mode = std::fs::metadata(&dir).unwrap().permissions().mode();
        // umask can only clear bits, never add group/other access.
        assert_eq!(mode & 0o077, 0);
    }
}
