use std::fs;

use assert_fs::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

use fileops::{FileOps, FsOpError, Op, SortOrder};

fn with_sep(p: &std::path::Path) -> String {
    format!("{}{}", p.display(), std::path::MAIN_SEPARATOR)
}

// Every folder operation must treat `dir` and `dir/` the same.
#[test]
fn folder_ops_ignore_trailing_separator() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let ops = FileOps::new();

    let plain = tmp.path().join("plain");
    let slashed = tmp.path().join("slashed");
    let a = ops.create_folder(&plain, 0o755, false)?;
    let b = ops.create_folder(with_sep(&slashed), 0o755, false)?;
    assert!(plain.is_dir() && slashed.is_dir());
    assert!(a.to_string_lossy().ends_with(std::path::MAIN_SEPARATOR));
    assert!(b.to_string_lossy().ends_with(std::path::MAIN_SEPARATOR));
    assert!(!b.to_string_lossy().ends_with("//"));

    let mut lister = FileOps::new();
    fs::write(plain.join("x"), b"1")?;
    let without = lister.read_folder(&plain, SortOrder::Ascending)?.to_vec();
    let with = lister.read_folder(with_sep(&plain), SortOrder::Ascending)?.to_vec();
    assert_eq!(without, with);

    ops.delete_folder(with_sep(&slashed))?;
    assert!(!slashed.exists());
    ops.delete_tree(with_sep(&plain))?;
    assert!(!plain.exists());
    Ok(())
}

#[test]
fn create_folder_twice_leaves_one_directory() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let ops = FileOps::new();
    let dir = tmp.path().join("reports");
    ops.create_folder(&dir, 0o755, true)?;
    ops.create_folder(&dir, 0o755, true)?;

    let entries: Vec<_> = fs::read_dir(tmp.path())?.collect::<Result<_, _>>()?;
    assert_eq!(entries.len(), 1);
    assert!(dir.is_dir());
    Ok(())
}

#[test]
fn delete_tree_removes_all_depths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    temp.child("root/a.txt").write_str("a")?;
    temp.child("root/one/b.txt").write_str("b")?;
    temp.child("root/one/two/three/c.txt").write_str("c")?;
    temp.child("root/empty").create_dir_all()?;

    FileOps::new().delete_tree(temp.child("root").path())?;

    temp.child("root").assert(predicate::path::missing());
    temp.close()?;
    Ok(())
}

#[test]
fn listing_orders_are_reverses() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    for name in ["zeta", "alpha", "Mid", "_under"] {
        temp.child(name).touch()?;
    }
    let mut ops = FileOps::new();

    let asc = ops.read_folder(temp.path(), SortOrder::Ascending)?.to_vec();
    assert_eq!(ops.listing_count(), asc.len());
    let desc = ops.read_folder(temp.path(), SortOrder::Descending)?.to_vec();
    assert_eq!(ops.listing_count(), desc.len());
    let raw = ops.read_folder(temp.path(), SortOrder::Unsorted)?.to_vec();
    assert_eq!(ops.listing_count(), raw.len());

    let mut reversed = asc.clone();
    reversed.reverse();
    assert_eq!(reversed, desc);
    assert_eq!(asc.len(), 6);
    assert!(asc.contains(&".".to_string()) && asc.contains(&"..".to_string()));
    Ok(())
}

#[test]
fn copy_and_move_with_missing_source_fail() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let ops = FileOps::new();

    let err = ops.copy_file(tmp.path().join("ghost"), tmp.path().join("copy")).unwrap_err();
    assert!(matches!(err, FsOpError::NotFound { op: Op::CopyFile, .. }));
    assert!(!tmp.path().join("copy").exists());

    let err = ops.move_file("ghost", tmp.path(), tmp.path().join("elsewhere")).unwrap_err();
    assert!(matches!(err, FsOpError::NotFound { op: Op::MoveFile, .. }));
    Ok(())
}

#[test]
fn upload_lands_in_new_folder() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let ops = FileOps::new();
    let upload = tmp.path().join("upload.tmp");
    fs::write(&upload, b"bytes")?;

    let dst = ops.move_uploaded_file(&upload, "photo.jpg", tmp.path().join("media/2024"), 0o755)?;
    assert_eq!(fs::read(&dst)?, b"bytes");
    assert_eq!(ops.filename(&dst), "photo");
    assert_eq!(ops.file_extension(&dst), "jpg");
    Ok(())
}
