use std::env;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::path::PathResolver;

/// Per-run state: the directory relative tokens are resolved against.
///
/// The current directory is always an existing, canonical directory. It only
/// changes through [`Session::change_dir`], which leaves it untouched on
/// failure.
#[derive(Debug, Clone)]
pub struct Session {
    current_dir: PathBuf,
    resolver: PathResolver,
}

impl Session {
    /// Starts in the directory the OS reports for this process.
    pub fn new() -> io::Result<Self> {
        Self::with_dir(env::current_dir()?)
    }

    /// Starts in `dir`, which must exist and be a directory.
    pub fn with_dir(dir: impl AsRef<Path>) -> io::Result<Self> {
        Self::with_resolver(dir, PathResolver::new())
    }

    pub fn with_resolver(dir: impl AsRef<Path>, resolver: PathResolver) -> io::Result<Self> {
        let current_dir = dir.as_ref().canonicalize()?;
        if !current_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", current_dir.display()),
            ));
        }

        Ok(Self {
            current_dir,
            resolver,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn resolve(&self, token: &str) -> PathBuf {
        let resolved = self.resolver.resolve(&self.current_dir, token);
        debug!(token, resolved = %resolved.display(), "resolved path");
        resolved
    }

    /// Replaces the current directory with the canonical form of `dir`.
    /// Callers check existence first; a canonicalize failure still leaves
    /// the session unchanged.
    pub fn change_dir(&mut self, dir: &Path) -> io::Result<()> {
        let canonical = dir.canonicalize()?;
        debug!(from = %self.current_dir.display(), to = %canonical.display(), "changing directory");
        self.current_dir = canonical;
        Ok(())
    }
}
