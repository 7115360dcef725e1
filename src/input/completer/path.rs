use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

use crate::path::PathResolver;

#[derive(Clone)]
pub struct PathCompleter {
    resolver: PathResolver,
}

impl PathCompleter {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }

    /// Candidates for the partial token `incomplete`, resolved against `cwd`.
    /// The typed directory part is kept verbatim in each replacement.
    pub fn complete_path(&self, cwd: &Path, incomplete: &str) -> Vec<Pair> {
        let (typed_dir, file_prefix) = match incomplete.rfind('/') {
            Some(idx) => incomplete.split_at(idx + 1),
            None => ("", incomplete),
        };

        let dir_to_search: PathBuf = if typed_dir.is_empty() {
            cwd.to_path_buf()
        } else {
            self.resolver.resolve(cwd, typed_dir)
        };

        self.get_path_matches(&dir_to_search, typed_dir, file_prefix)
    }

    fn get_path_matches(
        &self,
        dir_to_search: &Path,
        typed_dir: &str,
        file_prefix: &str,
    ) -> Vec<Pair> {
        let Ok(entries) = fs::read_dir(dir_to_search) else {
            return Vec::new();
        };
        let show_hidden = file_prefix.starts_with('.');

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(file_prefix) || (name.starts_with('.') && !show_hidden) {
                    return None;
                }
                Some(self.create_completion_pair(&name, &entry.path(), typed_dir))
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    fn create_completion_pair(&self, name: &str, path: &Path, typed_dir: &str) -> Pair {
        if path.is_dir() {
            Pair {
                display: format!("{}/", name),
                replacement: format!("{}{}/", typed_dir, name),
            }
        } else {
            Pair {
                display: name.to_string(),
                replacement: format!("{}{} ", typed_dir, name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_prefix_keeps_typed_dir() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src/core")).unwrap();
        fs::write(temp.path().join("src/cargo.toml"), b"").unwrap();

        let pairs = PathCompleter::new().complete_path(temp.path(), "src/c");
        let replacements: Vec<_> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(replacements, vec!["src/cargo.toml ", "src/core/"]);
    }

    #[test]
    fn test_hidden_entries_need_dot_prefix() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(".hidden"), b"").unwrap();
        fs::write(temp.path().join("shown"), b"").unwrap();
        let completer = PathCompleter::new();

        assert_eq!(completer.complete_path(temp.path(), "").len(), 1);
        assert_eq!(completer.complete_path(temp.path(), ".h").len(), 1);
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let temp = tempfile::tempdir().unwrap();
        assert!(PathCompleter::new()
            .complete_path(temp.path(), "nope/x")
            .is_empty());
    }
}
