//! Filesystem primitives behind [`crate::FileOps`].
//!
//! Each submodule exposes free functions returning `Result<_, FsOpError>`;
//! the facade adds the listing state and configured defaults on top.

pub mod archive;
pub mod copy;
pub mod create;
pub mod error;
pub mod files;
pub mod helpers;
pub mod listing;
pub mod mv;
pub mod path;
pub mod remove;
pub mod stat;
#[cfg(all(test, unix))]
mod test_support;

pub use error::{FsOpError, Op, Stage};
pub use listing::SortOrder;
