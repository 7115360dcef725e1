use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::{FsError, PathContext};

/// What a recursive copy produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub files: u64,
    pub directories: u64,
    pub bytes: u64,
}

/// Duplicates `source` at `destination`.
///
/// Directories are created as needed (existing ones are merged into) and
/// files overwrite whatever sits at their target. The first I/O error stops
/// the walk and names the failing path; anything copied up to that point
/// stays on disk.
pub fn copy_recursive(source: &Path, destination: &Path) -> Result<CopyStats, FsError> {
    let mut stats = CopyStats::default();
    copy_entry(source, destination, &mut stats)?;
    debug!(
        source = %source.display(),
        destination = %destination.display(),
        files = stats.files,
        directories = stats.directories,
        "copy finished"
    );
    Ok(stats)
}

fn copy_entry(source: &Path, destination: &Path, stats: &mut CopyStats) -> Result<(), FsError> {
    let metadata = match fs::metadata(source) {
        Err(_) if source.is_symlink() => return copy_link(source, destination, stats),
        other => other.at(source)?,
    };

    if !metadata.is_dir() {
        stats.bytes += fs::copy(source, destination)
            .map_err(|e| FsError::io(failing_side(source, destination), e))?;
        stats.files += 1;
        return Ok(());
    }

    if !destination.is_dir() {
        fs::create_dir_all(destination).at(destination)?;
    }
    stats.directories += 1;

    for entry in fs::read_dir(source).at(source)? {
        let entry = entry.at(source)?;
        copy_entry(&entry.path(), &destination.join(entry.file_name()), stats)?;
    }
    Ok(())
}

/// A failed file copy is blamed on the source only when the source can no
/// longer be opened for reading.
fn failing_side<'a>(source: &'a Path, destination: &'a Path) -> &'a Path {
    if fs::File::open(source).is_err() {
        source
    } else {
        destination
    }
}

/// Dangling links are recreated as links; there is nothing to follow.
#[cfg(unix)]
fn copy_link(source: &Path, destination: &Path, stats: &mut CopyStats) -> Result<(), FsError> {
    let target = fs::read_link(source).at(source)?;
    if fs::symlink_metadata(destination).is_ok() {
        fs::remove_file(destination).at(destination)?;
    }
    std::os::unix::fs::symlink(target, destination).at(destination)?;
    stats.files += 1;
    Ok(())
}

#[cfg(not(unix))]
fn copy_link(source: &Path, _destination: &Path, _stats: &mut CopyStats) -> Result<(), FsError> {
    fs::metadata(source).at(source).map(|_| ())
}

/// True when `destination` is `source` itself or lies somewhere below it.
/// `destination` need not exist yet; its deepest existing ancestor is
/// canonicalized and the missing tail re-appended.
pub fn overlaps(source: &Path, destination: &Path) -> bool {
    let Ok(source) = source.canonicalize() else {
        return false;
    };

    let mut existing = destination;
    let mut tail: Vec<OsString> = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            let full: PathBuf = tail.iter().rev().fold(canonical, |acc, part| acc.join(part));
            return full.starts_with(&source);
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent;
            }
            _ => return false,
        }
    }
}
