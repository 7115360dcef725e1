use super::{Command, CommandError, CommandSpec, Context, Flow};
use crate::core::FsError;

static CD: CommandSpec = CommandSpec {
    name: "cd",
    aliases: &[],
    min_args: 1,
    usage: "cd <dir>",
    summary: "change the current directory",
};

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn spec(&self) -> &'static CommandSpec {
        &CD
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        let target = ctx.session.resolve(CD.arg(args, 0)?);

        if !target.exists() {
            return Err(CommandError::NotFound(target));
        }
        if !target.is_dir() {
            return Err(CommandError::NotADirectory(target));
        }

        ctx.session
            .change_dir(&target)
            .map_err(|e| FsError::io(&target, e))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Harness;
    use super::*;
    use std::fs;

    #[test]
    fn test_cd_into_subdirectory() {
        let mut harness = Harness::new();
        fs::create_dir_all(harness.root().join("a/b")).unwrap();

        harness.run("cd a/b").unwrap();
        assert_eq!(harness.session.current_dir(), harness.root().join("a/b"));
    }

    #[test]
    fn test_cd_parent_and_canonical_form() {
        let mut harness = Harness::new();
        fs::create_dir_all(harness.root().join("a/b")).unwrap();

        harness.run("cd a/./b/../b").unwrap();
        assert_eq!(harness.session.current_dir(), harness.root().join("a/b"));

        harness.run("cd ..").unwrap();
        assert_eq!(harness.session.current_dir(), harness.root().join("a"));
    }

    #[test]
    fn test_cd_absolute() {
        let mut harness = Harness::new();
        let other = tempfile::tempdir().unwrap();
        let target = other.path().canonicalize().unwrap();

        harness.run(&format!("cd {}", target.display())).unwrap();
        assert_eq!(harness.session.current_dir(), target);
    }

    #[test]
    fn test_cd_missing_keeps_directory() {
        let mut harness = Harness::new();
        let before = harness.session.current_dir().to_path_buf();

        let result = harness.run("cd nowhere");
        assert!(matches!(result, Err(CommandError::NotFound(_))));
        assert_eq!(harness.session.current_dir(), before);
    }

    #[test]
    fn test_cd_into_file_rejected() {
        let mut harness = Harness::new();
        fs::write(harness.root().join("file.txt"), b"").unwrap();

        let result = harness.run("cd file.txt");
        assert!(matches!(result, Err(CommandError::NotADirectory(_))));
        assert_eq!(harness.session.current_dir(), harness.root());
    }

    #[test]
    fn test_cd_without_argument_is_usage() {
        let mut harness = Harness::new();
        let result = harness.run("cd");
        assert!(matches!(result, Err(CommandError::Usage("cd <dir>"))));
        assert_eq!(harness.session.current_dir(), harness.root());
    }
}
