use std::path::Path;

use tracing::debug;

use crate::fs_op::error::{FsOpError, Op};
use crate::fs_op::helpers::atomic_copy_file;
use crate::fs_op::stat::exists;

/// Copy the bytes of `src` to `dst`, replacing `dst` if present.
///
/// A missing `src` is an error, never a silent no-op. Returns the number of
/// bytes copied.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64, FsOpError> {
    let (s, d) = (src.as_ref(), dst.as_ref());
    if !exists(s) {
        return Err(FsOpError::not_found(Op::CopyFile, s));
    }
    let n = atomic_copy_file(s, d).map_err(|e| FsOpError::between(Op::CopyFile, s, d, e))?;
    debug!(src = %s.display(), dst = %d.display(), bytes = n, "copied file");
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn copies_bytes() {
        let td = tempdir().unwrap();
        let src = td.path().join("in.bin");
        let dst = td.path().join("out.bin");
        fs::write(&src, [0u8, 1, 2, 255]).unwrap();
        assert_eq!(copy_file(&src, &dst).unwrap(), 4);
        assert_eq!(fs::read(&dst).unwrap(), [0u8, 1, 2, 255]);
        assert!(src.exists());
    }

    #[test]
    fn missing_source_is_not_found() {
        let td = tempdir().unwrap();
        let err = copy_file(td.path().join("ghost"), td.path().join("out")).unwrap_err();
        assert!(matches!(err, FsOpError::NotFound { op: Op::CopyFile, .. }));
    }

    #[test]
    fn directory_source_fails() {
        let td = tempdir().unwrap();
        let err = copy_file(td.path(), td.path().join("out")).unwrap_err();
        assert!(matches!(err, FsOpError::PathContext { op: Op::CopyFile, .. }));
    }
}
