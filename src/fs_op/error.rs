use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The operation that produced a failure. Carried by every `FsOpError` so
/// the halt message always names what was being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    CreateFolder,
    DeleteFolder,
    DeleteTree,
    RenameFile,
    CopyFile,
    MoveFile,
    ReadFolder,
    MoveUploadedFile,
    WriteFile,
    AppendFile,
    ReadFile,
    WriteLittleFile,
    AppendLittleFile,
    ReadLittleFile,
    CreateZip,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::CreateFolder => "create_folder",
            Op::DeleteFolder => "delete_folder",
            Op::DeleteTree => "delete_tree",
            Op::RenameFile => "rename_file",
            Op::CopyFile => "copy_file",
            Op::MoveFile => "move_file",
            Op::ReadFolder => "read_folder",
            Op::MoveUploadedFile => "move_uploaded_file",
            Op::WriteFile => "write_file",
            Op::AppendFile => "append_file",
            Op::ReadFile => "read_file",
            Op::WriteLittleFile => "write_little_file",
            Op::AppendLittleFile => "append_little_file",
            Op::ReadLittleFile => "read_little_file",
            Op::CreateZip => "create_zip",
        };
        f.write_str(name)
    }
}

/// Step of an explicit open/act/close file access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Open,
    Read,
    Write,
    Close,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Open => "open",
            Stage::Read => "read",
            Stage::Write => "write",
            Stage::Close => "close",
        })
    }
}

/// Failures of the halting filesystem operations.
///
/// Library code only ever returns these; turning one into a process exit is
/// the job of [`crate::halt::HaltOnFailure`] at the outermost call site.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// A required path argument was empty.
    #[error("{op}: empty path")]
    EmptyPath { op: Op },

    /// A path the operation requires does not exist.
    #[error("{op}: `{}` does not exist", .path.display())]
    NotFound { op: Op, path: PathBuf },

    /// The underlying call on a single path failed.
    #[error("{op} failed on `{}`: {source}", .path.display())]
    Io {
        op: Op,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One step of an open/act/close sequence failed.
    #[error("{op} failed to {stage} `{}`: {source}", .path.display())]
    Content {
        op: Op,
        stage: Stage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Contextual error that includes source and destination paths.
    #[error("{op} failed from `{}` to `{}`: {source}", .src.display(), .dst.display())]
    PathContext {
        op: Op,
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsOpError {
    pub(crate) fn io(op: Op, path: &Path, source: io::Error) -> Self {
        FsOpError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn content(op: Op, stage: Stage, path: &Path, source: io::Error) -> Self {
        FsOpError::Content {
            op,
            stage,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn between(op: Op, src: &Path, dst: &Path, source: io::Error) -> Self {
        FsOpError::PathContext {
            op,
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source,
        }
    }

    pub(crate) fn not_found(op: Op, path: &Path) -> Self {
        FsOpError::NotFound {
            op,
            path: path.to_path_buf(),
        }
    }

    /// The operation that failed.
    pub fn op(&self) -> Op {
        match self {
            FsOpError::EmptyPath { op }
            | FsOpError::NotFound { op, .. }
            | FsOpError::Io { op, .. }
            | FsOpError::Content { op, .. }
            | FsOpError::PathContext { op, .. } => *op,
        }
    }
}
