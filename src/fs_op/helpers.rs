use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};
use tracing::debug;

// 64 KiB buffer for file copies.
const COPY_BUFFER: usize = 64 * 1024;

// Sibling temp name next to `dst`, unique per process and call.
fn temp_sibling(dst: &Path) -> PathBuf {
    static NEXT_ID: AtomicU64 = AtomicU64::new(0);
    let seq = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let name = format!(".fileops-copy.{:x}.{:x}", std::process::id(), seq);
    match dst.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Copy `src` over `dst` through a temporary sibling file, then rename it
/// into place. A failed copy leaves no partial `dst` and no temp file.
///
/// An existing `dst` is replaced, not rewritten: it takes the permission
/// bits of `src` and any other hard links to it keep the old content.
pub fn atomic_copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    let tmp = temp_sibling(dst);
    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.buffer_size = COPY_BUFFER;

    let copied = match fs_extra_copy(src, &tmp, &options) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(io::Error::other(e));
        }
    };
    if let Err(e) = fs::rename(&tmp, dst) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(copied)
}

/// Rename `src` to `dst`. Only when the rename crosses filesystems is the
/// file copied and the source removed instead; if that removal fails the
/// copy is deleted again so the file stays in one place.
pub fn rename_or_copy(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(rename_err) if rename_err.kind() == io::ErrorKind::CrossesDevices && src.is_file() => {
            debug!(
                src = %src.display(),
                dst = %dst.display(),
                "rename crosses devices, falling back to copy"
            );
            atomic_copy_file(src, dst)?;
            if let Err(e) = fs::remove_file(src) {
                let _ = fs::remove_file(dst);
                return Err(e);
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Set the permission bits of `path` to `mode`. No-op outside Unix.
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
    }
    #[cfg(not(unix))]
    {
        let _ = (path, mode);
        Ok(())
    }
}
