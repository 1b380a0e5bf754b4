//! Permission fixtures for unit tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Make `dir` read-only (0o555). Returns false, with the mode restored,
/// when the process can still create entries in it (running as root), so
/// the caller can skip checks that rely on permissions being enforced.
pub(crate) fn lock_dir(dir: &Path) -> bool {
    fs::set_permissions(dir, fs::Permissions::from_mode(0o555)).unwrap();
    let canary = dir.join(".canary");
    if fs::write(&canary, b"").is_ok() {
        let _ = fs::remove_file(&canary);
        unlock_dir(dir);
        return false;
    }
    true
}

pub(crate) fn unlock_dir(dir: &Path) {
    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
}
