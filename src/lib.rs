pub mod download;
pub mod file_ops;
pub mod fs_op;
pub mod halt;
pub mod logging;
pub mod settings;

pub use crate::download::{ContentType, DownloadError, ResponseBuffer, ResponseWriter};
pub use crate::file_ops::FileOps;
pub use crate::fs_op::{FsOpError, Op, SortOrder};
pub use crate::halt::HaltOnFailure;
pub use crate::settings::Settings;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
