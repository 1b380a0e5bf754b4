use std::fs;
use std::path::Path;

/// What a path currently points at, following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    NotFound,
    Directory,
    File,
    /// Sockets, FIFOs, devices.
    Other,
}

impl PathType {
    /// Classify `path` with a single `metadata` call.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match fs::metadata(path.as_ref()) {
            Err(_) => PathType::NotFound,
            Ok(md) if md.is_dir() => PathType::Directory,
            Ok(md) if md.is_file() => PathType::File,
            Ok(_) => PathType::Other,
        }
    }

    pub fn exists(self) -> bool {
        self != PathType::NotFound
    }
}

/// Return `true` if the provided `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// Return `true` if the provided `path` exists.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path).exists()
}
