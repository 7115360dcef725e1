mod permissions;

pub use permissions::{permissions, Access, PermissionFlags, PermissionSource};

use std::fmt;
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate};

use crate::core::error::{FsError, PathContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "File"),
            EntryKind::Directory => write!(f, "Directory"),
        }
    }
}

/// Snapshot of one entry's metadata at the time it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub kind: EntryKind,
    /// Byte length; `None` for directories.
    pub size: Option<u64>,
    /// Last modification, truncated to the day in the local timezone.
    pub modified: NaiveDate,
}

pub fn info(path: &Path) -> Result<EntryInfo, FsError> {
    let metadata = stat(path)?;
    let modified = metadata.modified().at(path)?;

    let kind = if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };

    Ok(EntryInfo {
        name: display_name(path),
        kind,
        size: (kind == EntryKind::File).then(|| metadata.len()),
        modified: DateTime::<Local>::from(modified).date_naive(),
    })
}

/// Reads metadata, mapping a missing path to [`FsError::NotFound`].
pub(crate) fn stat(path: &Path) -> Result<Metadata, FsError> {
    fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
        _ => FsError::io(path, e),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
