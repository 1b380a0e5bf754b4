//! ZIP archive creation.
//!
//! Only the target folder creation can fail the operation. Everything the
//! archive codec does (creating the archive file, adding entries, writing
//! the central directory) is best-effort: failures are logged at `warn`
//! and the remaining entries are still processed.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zip::result::ZipResult;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::fs_op::create::create_folder;
use crate::fs_op::error::FsOpError;
use crate::fs_op::path::in_folder;

/// Mode used when `create_zip` has to create its target folder.
pub const ZIP_FOLDER_MODE: u32 = 0o777;

/// Write a new archive `archive_name` inside `target_folder` holding every
/// file in `files` under its base name.
///
/// An empty `target_folder` places the archive at `archive_name` itself.
/// Returns the archive path whether or not the codec succeeded.
pub fn create_zip<I, P>(
    files: I,
    archive_name: &str,
    target_folder: impl AsRef<Path>,
    folder_mode: u32,
) -> Result<PathBuf, FsOpError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let target_folder = target_folder.as_ref();
    if !target_folder.as_os_str().is_empty() {
        create_folder(target_folder, folder_mode, true)?;
    }
    let archive = in_folder(target_folder, archive_name);

    let out = match File::create(&archive) {
        Ok(f) => f,
        Err(e) => {
            warn!(archive = %archive.display(), error = %e, "could not create archive");
            return Ok(archive);
        }
    };
    let mut zip = ZipWriter::new(out);

    let mut added = 0usize;
    for src in files {
        let src = src.as_ref();
        let entry = entry_name(src);
        match add_entry(&mut zip, src, &entry) {
            Ok(()) => added += 1,
            Err(e) => warn!(src = %src.display(), entry = %entry, error = %e, "skipping archive entry"),
        }
    }
    if let Err(e) = zip.finish() {
        warn!(archive = %archive.display(), error = %e, "could not finalize archive");
    }
    debug!(archive = %archive.display(), entries = added, "wrote archive");
    Ok(archive)
}

// Base name of the source path; the directory prefix never reaches the archive.
fn entry_name(src: &Path) -> String {
    src.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| src.to_string_lossy().into_owned())
}

fn add_entry(zip: &mut ZipWriter<File>, src: &Path, entry: &str) -> ZipResult<()> {
    // Open before starting the entry so a missing source leaves no empty entry.
    let mut input = File::open(src)?;
    zip.start_file(entry, SimpleFileOptions::default())?;
    io::copy(&mut input, zip)?;
    Ok(())
}
