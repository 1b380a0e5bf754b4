//! The `FileOps` facade.
//!
//! Thin, path-normalizing wrappers over [`crate::fs_op`] and
//! [`crate::download`]. The only state kept between calls is the result of
//! the last successful [`FileOps::read_folder`].

use std::path::{Path, PathBuf};

use crate::download::{self, ContentType, DownloadError, DownloadOptions, ResponseWriter};
use crate::fs_op::{archive, copy, create, files, listing, mv, path, remove};
use crate::fs_op::{FsOpError, SortOrder};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct FileOps {
    listing: Vec<String>,
    listing_count: usize,
    download: DownloadOptions,
    zip_folder_mode: u32,
}

impl Default for FileOps {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOps {
    /// Facade with the default settings.
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        FileOps {
            listing: Vec::new(),
            listing_count: 0,
            download: settings.download_options(),
            zip_folder_mode: settings.zip_folder_mode,
        }
    }

    /// Entry names from the last successful `read_folder`.
    pub fn listing(&self) -> &[String] {
        &self.listing
    }

    pub fn listing_count(&self) -> usize {
        self.listing_count
    }

    pub fn download_options(&self) -> &DownloadOptions {
        &self.download
    }

    pub fn create_folder<P: AsRef<Path>>(
        &self,
        path: P,
        mode: u32,
        recursive: bool,
    ) -> Result<PathBuf, FsOpError> {
        create::create_folder(path, mode, recursive)
    }

    pub fn delete_folder<P: AsRef<Path>>(&self, path: P) -> Result<(), FsOpError> {
        remove::delete_folder(path)
    }

    pub fn delete_tree<P: AsRef<Path>>(&self, path: P) -> Result<(), FsOpError> {
        remove::delete_tree(path)
    }

    pub fn rename_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, old: P, new: Q) -> Result<(), FsOpError> {
        mv::rename_file(old, new)
    }

    pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, src: P, dst: Q) -> Result<u64, FsOpError> {
        copy::copy_file(src, dst)
    }

    pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        name: &str,
        from_folder: P,
        to_folder: Q,
    ) -> Result<PathBuf, FsOpError> {
        mv::move_file(name, from_folder, to_folder)
    }

    /// List `path` into the stored listing and return it.
    ///
    /// When `path` is not a directory nothing is listed and the previous
    /// listing is returned unchanged.
    pub fn read_folder<P: AsRef<Path>>(
        &mut self,
        path: P,
        order: SortOrder,
    ) -> Result<&[String], FsOpError> {
        if let Some(names) = listing::list_folder(path, order)? {
            self.listing_count = names.len();
            self.listing = names;
        }
        Ok(&self.listing)
    }

    pub fn file_extension<P: AsRef<Path>>(&self, path: P) -> String {
        path::file_extension(path)
    }

    pub fn filename<P: AsRef<Path>>(&self, path: P) -> String {
        path::filename(path)
    }

    pub fn move_uploaded_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        tmp_path: P,
        new_name: &str,
        folder: Q,
        mode: u32,
    ) -> Result<PathBuf, FsOpError> {
        mv::move_uploaded_file(tmp_path, new_name, folder, mode)
    }

    pub fn write_file<P: AsRef<Path>>(&self, path: P, content: impl AsRef<[u8]>) -> Result<(), FsOpError> {
        files::write_file(path, content)
    }

    pub fn append_file<P: AsRef<Path>>(&self, path: P, content: impl AsRef<[u8]>) -> Result<(), FsOpError> {
        files::append_file(path, content)
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<u8>, FsOpError> {
        files::read_file(path)
    }

    pub fn write_little_file<P: AsRef<Path>>(
        &self,
        path: P,
        content: impl AsRef<[u8]>,
    ) -> Result<(), FsOpError> {
        files::write_little_file(path, content)
    }

    pub fn append_little_file<P: AsRef<Path>>(
        &self,
        path: P,
        content: impl AsRef<[u8]>,
    ) -> Result<(), FsOpError> {
        files::append_little_file(path, content)
    }

    pub fn read_little_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<u8>, FsOpError> {
        files::read_little_file(path)
    }

    /// Archive `files` into `target_folder/archive_name`. Codec failures are
    /// logged, not returned.
    pub fn create_zip<I, P>(
        &self,
        files: I,
        archive_name: &str,
        target_folder: impl AsRef<Path>,
    ) -> Result<PathBuf, FsOpError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        archive::create_zip(files, archive_name, target_folder, self.zip_folder_mode)
    }

    pub fn download<W: ResponseWriter + ?Sized>(
        &self,
        name: &str,
        folder: &str,
        content_type: &ContentType,
        out: &mut W,
    ) -> Result<u64, DownloadError> {
        download::download(name, folder, content_type, &self.download, out)
    }

    pub fn download_csv<W: ResponseWriter + ?Sized>(
        &self,
        name: &str,
        folder: &str,
        delete: bool,
        out: &mut W,
    ) -> Result<u64, DownloadError> {
        download::download_as(ContentType::Csv, name, folder, delete, &self.download, out)
    }

    pub fn download_excel<W: ResponseWriter + ?Sized>(
        &self,
        name: &str,
        folder: &str,
        delete: bool,
        out: &mut W,
    ) -> Result<u64, DownloadError> {
        download::download_as(ContentType::Excel, name, folder, delete, &self.download, out)
    }

    pub fn download_json<W: ResponseWriter + ?Sized>(
        &self,
        name: &str,
        folder: &str,
        delete: bool,
        out: &mut W,
    ) -> Result<u64, DownloadError> {
        download::download_as(ContentType::Json, name, folder, delete, &self.download, out)
    }

    pub fn download_pdf<W: ResponseWriter + ?Sized>(
        &self,
        name: &str,
        folder: &str,
        delete: bool,
        out: &mut W,
    ) -> Result<u64, DownloadError> {
        download::download_as(ContentType::Pdf, name, folder, delete, &self.download, out)
    }

    pub fn download_zip<W: ResponseWriter + ?Sized>(
        &self,
        name: &str,
        folder: &str,
        delete: bool,
        out: &mut W,
    ) -> Result<u64, DownloadError> {
        download::download_as(ContentType::Zip, name, folder, delete, &self.download, out)
    }
}
