use std::path::PathBuf;

use thiserror::Error;

/// Failure of a filesystem operation, tagged with the path that failed.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FsError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            FsError::NotFound(path) => path,
            FsError::Io { path, .. } => path,
        }
    }
}

/// Attaches a path to a raw `io::Result`.
pub(crate) trait PathContext<T> {
    fn at(self, path: &std::path::Path) -> Result<T, FsError>;
}

impl<T> PathContext<T> for std::io::Result<T> {
    fn at(self, path: &std::path::Path) -> Result<T, FsError> {
        self.map_err(|e| FsError::io(path, e))
    }
}
