mod command;
mod path;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use self::command::CommandCompleter;
use self::path::PathCompleter;
use crate::core::commands::CommandExecutor;
use crate::highlight::Palette;

/// Line-editor helper: completion, colouring and usage hints. Path
/// completion works against `cwd`, which the shell refreshes before every
/// prompt.
pub struct ShellHelper {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    palette: Palette,
    cwd: PathBuf,
}

impl ShellHelper {
    pub fn new(executor: &CommandExecutor, palette: Palette, cwd: &Path) -> Self {
        Self {
            command_completer: CommandCompleter::new(executor),
            path_completer: PathCompleter::new(),
            palette,
            cwd: cwd.to_path_buf(),
        }
    }

    pub fn set_cwd(&mut self, cwd: &Path) {
        self.cwd = cwd.to_path_buf();
    }

    fn complete_line(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_up_to_cursor = &line[..pos];
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

        if line_up_to_cursor.is_empty() || line_up_to_cursor.ends_with(char::is_whitespace) {
            words.push("");
        }

        let last_word = words.last().copied().unwrap_or("");
        let start = pos - last_word.len();

        if words.len() == 1 {
            (start, self.command_completer.complete_command(last_word))
        } else {
            (start, self.path_completer.complete_path(&self.cwd, last_word))
        }
    }
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.palette.is_plain() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(
            self.palette
                .highlight_line(line, |word| self.command_completer.is_known(word)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.palette.hint(hint))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        self.command_completer.usage_hint(line)
    }
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.complete_line(line, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn helper(cwd: &Path) -> ShellHelper {
        ShellHelper::new(&CommandExecutor::new(), Palette::plain(), cwd)
    }

    #[test]
    fn test_first_word_completes_commands() {
        let temp = tempfile::tempdir().unwrap();
        let helper = helper(temp.path());

        let (start, pairs) = helper.complete_line("  mk", 4);
        assert_eq!(start, 2);
        let names: Vec<_> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(names, vec!["mkdir"]);
    }

    #[test]
    fn test_later_words_complete_paths_from_cwd() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("photos")).unwrap();
        fs::write(temp.path().join("phone.txt"), b"").unwrap();
        let helper = helper(temp.path());

        let line = "cd ph";
        let (start, pairs) = helper.complete_line(line, line.len());
        assert_eq!(start, 3);
        let replacements: Vec<_> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(replacements, vec!["phone.txt ", "photos/"]);
    }

    #[test]
    fn test_cwd_follows_session() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("inner/deeper")).unwrap();
        let mut helper = helper(temp.path());
        helper.set_cwd(&temp.path().join("inner"));

        let (_, pairs) = helper.complete_line("ls d", 4);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "deeper/");
    }
}
