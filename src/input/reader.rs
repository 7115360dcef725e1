use std::io::BufRead;
use std::path::Path;

use rustyline::{config::Configurer, error::ReadlineError, history::DefaultHistory, Editor};

use super::ShellHelper;
use crate::error::ShellError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C while editing; the partial line is discarded.
    Interrupted,
    Eof,
}

/// Where the session loop gets its next line from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str, cwd: &Path) -> Result<ReadOutcome, ShellError>;
}

/// Terminal input through rustyline, with completion against `cwd` and an
/// in-memory history that is never written to disk.
pub struct InteractiveInput {
    editor: Editor<ShellHelper, DefaultHistory>,
}

impl InteractiveInput {
    pub fn new(helper: ShellHelper) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(helper));
        editor.set_auto_add_history(true);
        Ok(Self { editor })
    }
}

impl LineSource for InteractiveInput {
    fn read_line(&mut self, prompt: &str, cwd: &Path) -> Result<ReadOutcome, ShellError> {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_cwd(cwd);
        }

        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain line-by-line input, used when stdin is not a terminal. No prompt
/// is shown. Bytes that are not UTF-8 are replaced, never rejected.
pub struct ScriptInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptInput<R> {
    fn read_line(&mut self, _prompt: &str, _cwd: &Path) -> Result<ReadOutcome, ShellError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ReadOutcome::Eof);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(ReadOutcome::Line(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_script_input_lines_then_eof() {
        let mut input = ScriptInput::new(Cursor::new("ls\r\ncd sub\n\nlast"));
        let cwd = Path::new("/");

        let mut seen = Vec::new();
        loop {
            match input.read_line("> ", cwd).unwrap() {
                ReadOutcome::Line(line) => seen.push(line),
                ReadOutcome::Eof => break,
                ReadOutcome::Interrupted => unreachable!(),
            }
        }
        assert_eq!(seen, vec!["ls", "cd sub", "", "last"]);
        assert_eq!(input.read_line("> ", cwd).unwrap(), ReadOutcome::Eof);
    }

    #[test]
    fn test_script_input_replaces_invalid_utf8() {
        let mut input = ScriptInput::new(Cursor::new(b"create caf\xe9.txt\nls\n".to_vec()));
        let cwd = Path::new("/");

        assert_eq!(
            input.read_line("> ", cwd).unwrap(),
            ReadOutcome::Line("create caf\u{fffd}.txt".to_string())
        );
        assert_eq!(
            input.read_line("> ", cwd).unwrap(),
            ReadOutcome::Line("ls".to_string())
        );
    }
}
