//! Whole-file content access.
//!
//! Two flavours exist. `write_file`/`append_file`/`read_file` go through an
//! explicit open, act and close sequence and report which step failed. The
//! `*_little_file` variants use a single std call each. File handles are
//! closed on drop, so every exit path releases them.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::fs_op::error::{FsOpError, Op, Stage};

fn write_with(op: Op, path: &Path, content: &[u8], options: &OpenOptions) -> Result<(), FsOpError> {
    let mut file = options
        .open(path)
        .map_err(|e| FsOpError::content(op, Stage::Open, path, e))?;
    file.write_all(content)
        .map_err(|e| FsOpError::content(op, Stage::Write, path, e))?;
    // Close is flush + release; fsync is EINVAL on pipes and ttys.
    file.flush()
        .map_err(|e| FsOpError::content(op, Stage::Close, path, e))?;
    drop(file);
    debug!(%op, path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Create or truncate `path` and write `content` to it.
pub fn write_file<P: AsRef<Path>>(path: P, content: impl AsRef<[u8]>) -> Result<(), FsOpError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    write_with(Op::WriteFile, path.as_ref(), content.as_ref(), &options)
}

/// Append `content` to `path`, creating it if needed.
pub fn append_file<P: AsRef<Path>>(path: P, content: impl AsRef<[u8]>) -> Result<(), FsOpError> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    write_with(Op::AppendFile, path.as_ref(), content.as_ref(), &options)
}

/// Read exactly as many bytes as `path` holds when opened.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FsOpError> {
    let p = path.as_ref();
    let op = Op::ReadFile;
    let mut file = File::open(p).map_err(|e| FsOpError::content(op, Stage::Open, p, e))?;
    let len = file
        .metadata()
        .and_then(|md| usize::try_from(md.len()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)))
        .map_err(|e| FsOpError::content(op, Stage::Read, p, e))?;
    let mut buf = vec![0u8; len];
    file.read_exact(&mut buf)
        .map_err(|e| FsOpError::content(op, Stage::Read, p, e))?;
    Ok(buf)
}

pub fn write_little_file<P: AsRef<Path>>(path: P, content: impl AsRef<[u8]>) -> Result<(), FsOpError> {
    let p = path.as_ref();
    fs::write(p, content).map_err(|e| FsOpError::io(Op::WriteLittleFile, p, e))
}

pub fn append_little_file<P: AsRef<Path>>(path: P, content: impl AsRef<[u8]>) -> Result<(), FsOpError> {
    let p = path.as_ref();
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(p)
        .and_then(|mut f| f.write_all(content.as_ref()))
        .map_err(|e| FsOpError::io(Op::AppendLittleFile, p, e))
}

pub fn read_little_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FsOpError> {
    let p = path.as_ref();
    fs::read(p).map_err(|e| FsOpError::io(Op::ReadLittleFile, p, e))
}
