use std::path::{Path, PathBuf};

const PARENT: &str = "..";

/// Turns user tokens into absolute paths relative to a current directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: Option<PathBuf>,
}

impl PathResolver {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    /// A resolver that never expands `~`, whatever the host says.
    pub fn without_home() -> Self {
        Self { home: None }
    }

    /// Resolves `token` against `current`. Performs no existence check.
    ///
    /// `..` yields the parent of `current` (the root is its own parent),
    /// absolute tokens pass through unchanged and `~` / `~/rest` expand
    /// against the home directory when one is known. Anything else is
    /// joined onto `current`.
    pub fn resolve(&self, current: &Path, token: &str) -> PathBuf {
        if token == PARENT {
            return current.parent().unwrap_or(current).to_path_buf();
        }

        let path = Path::new(token);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        if let Some(expanded) = self.expand_home(token) {
            return expanded;
        }

        current.join(path)
    }

    fn expand_home(&self, token: &str) -> Option<PathBuf> {
        let home = self.home.as_ref()?;
        if token == "~" {
            return Some(home.clone());
        }

        let rest = token.strip_prefix("~/")?;
        let mut expanded = home.clone();
        for part in rest.split('/').filter(|part| !part.is_empty()) {
            expanded.push(part);
        }
        Some(expanded)
    }
}
