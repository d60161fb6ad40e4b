//! Shared filesystem helpers built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Create (or truncate) a UTF-8 file path using ambient authority.
///
/// Missing parent directories are created first.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Open the directory containing `path` and return it with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Move `from` over `to`, replacing any existing file.
///
/// Both paths should share a parent directory so the rename is atomic.
pub fn rename_utf8_file(from: &Utf8Path, to: &Utf8Path) -> io::Result<()> {
    let (from_dir, from_name) = open_dir_and_file(from)?;
    let (to_dir, to_name) = open_dir_and_file(to)?;
    from_dir.rename(from_name.as_str(), &to_dir, to_name.as_str())
}

/// Remove the file at `path`.
pub fn remove_utf8_file(path: &Utf8Path) -> io::Result<()> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.remove_file(name.as_str())
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) else {
        return Ok(());
    };
    let (base, relative) = ambient_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(relative)
}

/// Open the ambient directory a path is anchored at and return the remainder.
///
/// Absolute paths are anchored at their root (`/`, or a drive root on
/// Windows); relative paths at the current directory.
pub fn ambient_base(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &Utf8Path)> {
    let root = path
        .ancestors()
        .last()
        .filter(|root| path.has_root() && !root.as_str().is_empty());
    let (base, relative) = match root {
        Some(root) => (root, path.strip_prefix(root).map_err(io::Error::other)?),
        None => (Utf8Path::new("."), path),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(base, ambient_authority())?;
    Ok((dir, relative))
}
