use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fs_op::create::create_folder;
use crate::fs_op::error::{FsOpError, Op};
use crate::fs_op::helpers::{rename_or_copy, set_mode};
use crate::fs_op::path::in_folder;
use crate::fs_op::stat::exists;

/// Rename `old` to `new`. Both paths must be non-empty.
pub fn rename_file<P: AsRef<Path>, Q: AsRef<Path>>(old: P, new: Q) -> Result<(), FsOpError> {
    let (o, n) = (old.as_ref(), new.as_ref());
    if o.as_os_str().is_empty() || n.as_os_str().is_empty() {
        return Err(FsOpError::EmptyPath { op: Op::RenameFile });
    }
    fs::rename(o, n).map_err(|e| FsOpError::between(Op::RenameFile, o, n, e))?;
    debug!(old = %o.display(), new = %n.display(), "renamed");
    Ok(())
}

/// Move the file `name` from `from_folder` to `to_folder`, keeping its name.
///
/// Returns the destination path.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(
    name: &str,
    from_folder: P,
    to_folder: Q,
) -> Result<PathBuf, FsOpError> {
    let src = in_folder(from_folder, name);
    let dst = in_folder(to_folder, name);
    if !exists(&src) {
        return Err(FsOpError::not_found(Op::MoveFile, &src));
    }
    rename_or_copy(&src, &dst).map_err(|e| FsOpError::between(Op::MoveFile, &src, &dst, e))?;
    debug!(src = %src.display(), dst = %dst.display(), "moved file");
    Ok(dst)
}

/// Move a freshly uploaded temp file into `folder` as `new_name`.
///
/// `folder` is created with `mode` when missing, and the moved file gets
/// permission bits `mode` as well. A missing nested `folder` therefore needs
/// a `mode` with search bits (e.g. 0o755); create it beforehand to give the
/// file a narrower mode. An empty `folder` means the current directory.
/// Returns the destination path.
pub fn move_uploaded_file<P: AsRef<Path>, Q: AsRef<Path>>(
    tmp_path: P,
    new_name: &str,
    folder: Q,
    mode: u32,
) -> Result<PathBuf, FsOpError> {
    let folder = folder.as_ref();
    if !folder.as_os_str().is_empty() {
        create_folder(folder, mode, true)?;
    }
    let src = tmp_path.as_ref();
    let dst = in_folder(folder, new_name);
    rename_or_copy(src, &dst)
        .map_err(|e| FsOpError::between(Op::MoveUploadedFile, src, &dst, e))?;
    set_mode(&dst, mode).map_err(|e| FsOpError::io(Op::MoveUploadedFile, &dst, e))?;
    debug!(src = %src.display(), dst = %dst.display(), "stored upload");
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(unix)]
    use crate::fs_op::test_support::{lock_dir, unlock_dir};
    use tempfile::tempdir;

    #[test]
    fn rename_within_dir() {
        let td = tempdir().unwrap();
        let a = td.path().join("a.txt");
        let b = td.path().join("b.txt");
        fs::write(&a, b"x").unwrap();
        rename_file(&a, &b).unwrap();
        assert!(!a.exists());
        assert!(b.exists());
    }

    #[test]
    fn rename_rejects_empty() {
        assert!(matches!(
            rename_file("", "x"),
            Err(FsOpError::EmptyPath { op: Op::RenameFile })
        ));
    }

    #[test]
    fn rename_missing_source_fails() {
        let td = tempdir().unwrap();
        let err = rename_file(td.path().join("nope"), td.path().join("b")).unwrap_err();
        assert!(matches!(err, FsOpError::PathContext { op: Op::RenameFile, .. }));
    }

    #[test]
    fn move_between_folders_with_and_without_separator() {
        let td = tempdir().unwrap();
        let from = td.path().join("from");
        let to = td.path().join("to");
        fs::create_dir_all(&from).unwrap();
        fs::create_dir_all(&to).unwrap();
        fs::write(from.join("r.csv"), b"1,2").unwrap();

        let dst = move_file("r.csv", &from, format!("{}/", to.display())).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"1,2");
        assert!(!from.join("r.csv").exists());
        assert!(to.join("r.csv").exists());
    }

    #[test]
    fn move_missing_is_not_found() {
        let td = tempdir().unwrap();
        let err = move_file("ghost.txt", td.path(), td.path().join("to")).unwrap_err();
        assert!(matches!(err, FsOpError::NotFound { op: Op::MoveFile, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn move_out_of_read_only_folder_keeps_single_copy() {
        let td = tempdir().unwrap();
        let from = td.path().join("from");
        let to = td.path().join("to");
        fs::create_dir_all(&from).unwrap();
        fs::create_dir_all(&to).unwrap();
        fs::write(from.join("r.csv"), b"1,2").unwrap();
        if !lock_dir(&from) {
            return;
        }

        let res = move_file("r.csv", &from, &to);
        unlock_dir(&from);
        assert!(matches!(res, Err(FsOpError::PathContext { op: Op::MoveFile, .. })));
        assert!(from.join("r.csv").exists());
        assert!(!to.join("r.csv").exists());
    }

    #[test]
    fn upload_creates_folder_and_sets_mode() {
        let td = tempdir().unwrap();
        let tmp = td.path().join("php123.tmp");
        fs::write(&tmp, b"upload").unwrap();
        let folder = td.path().join("uploads/2024");

        let dst = move_uploaded_file(&tmp, "avatar.png", &folder, 0o750).unwrap();
        assert_eq!(dst, folder.join("avatar.png"));
        assert_eq!(fs::read(&dst).unwrap(), b"upload");
        assert!(!tmp.exists());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&dst).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o750);
        }
    }

    #[test]
    fn upload_missing_temp_fails() {
        let td = tempdir().unwrap();
        let err = move_uploaded_file(td.path().join("gone"), "x", td.path(), 0o644).unwrap_err();
        assert_eq!(err.op(), Op::MoveUploadedFile);
    }
}
