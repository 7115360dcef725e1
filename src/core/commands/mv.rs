use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::{Command, CommandError, CommandSpec, Context, Flow};
use crate::core::error::PathContext;
use crate::core::{traversal, FsError};

static MOVE: CommandSpec = CommandSpec {
    name: "mv",
    aliases: &["move"],
    min_args: 2,
    usage: "mv <src> <dest>",
    summary: "move or rename; into <dest> when it is a directory",
};

#[derive(Clone)]
pub struct MoveCommand;

impl Default for MoveCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveCommand {
    pub fn new() -> Self {
        Self
    }

    /// Renames `source` to `destination`, falling back to copy-then-remove
    /// when the two sit on different devices.
    fn move_entry(&self, source: &Path, destination: &Path) -> Result<(), FsError> {
        let err = match fs::rename(source, destination) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        if !is_cross_device(&err) {
            return Err(FsError::io(source, err));
        }

        debug!(
            source = %source.display(),
            destination = %destination.display(),
            "rename crosses devices, copying instead"
        );
        copy_then_remove(source, destination)
    }
}

/// Moves by duplicating `source` at `destination` and then deleting the
/// source. Nothing is removed unless the copy completed.
fn copy_then_remove(source: &Path, destination: &Path) -> Result<(), FsError> {
    let is_dir = fs::symlink_metadata(source).at(source)?.is_dir();
    traversal::copy_recursive(source, destination)?;
    if is_dir {
        fs::remove_dir_all(source).at(source)
    } else {
        fs::remove_file(source).at(source)
    }
}

#[cfg(unix)]
fn is_cross_device(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::EXDEV)
}

#[cfg(not(unix))]
fn is_cross_device(_err: &io::Error) -> bool {
    false
}

impl Command for MoveCommand {
    fn spec(&self) -> &'static CommandSpec {
        &MOVE
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        let source = ctx.session.resolve(MOVE.arg(args, 0)?);
        let mut destination = ctx.session.resolve(MOVE.arg(args, 1)?);

        if fs::symlink_metadata(&source).is_err() {
            return Err(CommandError::NotFound(source));
        }
        if destination.is_dir() {
            if let Some(name) = source.file_name() {
                destination.push(name);
            }
        }

        self.move_entry(&source, &destination)?;
        let message = format!("Moved {} -> {}", source.display(), destination.display());
        writeln!(ctx.out, "{}", ctx.palette.success(&message))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Harness;
    use super::*;

    #[test]
    fn test_mv_renames_file() {
        let mut harness = Harness::new();
        fs::write(harness.root().join("old.txt"), b"content").unwrap();

        harness.run("mv old.txt new.txt").unwrap();
        assert!(!harness.root().join("old.txt").exists());
        assert_eq!(fs::read(harness.root().join("new.txt")).unwrap(), b"content");
    }

    #[test]
    fn test_mv_into_existing_directory() {
        let mut harness = Harness::new();
        let root = harness.root();
        fs::create_dir(root.join("box")).unwrap();
        fs::write(root.join("box/existing.txt"), b"stay").unwrap();
        fs::create_dir(root.join("item")).unwrap();
        fs::write(root.join("item/payload.txt"), b"go").unwrap();

        harness.run("move item box").unwrap();

        assert!(!root.join("item").exists());
        assert_eq!(fs::read(root.join("box/item/payload.txt")).unwrap(), b"go");
        assert_eq!(fs::read(root.join("box/existing.txt")).unwrap(), b"stay");
    }

    #[test]
    fn test_mv_missing_source() {
        let mut harness = Harness::new();
        let result = harness.run("mv nothing anywhere");
        assert!(matches!(result, Err(CommandError::NotFound(_))));
    }

    #[test]
    fn test_copy_then_remove_moves_tree() {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("album");
        let destination = temp.path().join("elsewhere/album");
        fs::create_dir_all(source.join("2023/summer")).unwrap();
        fs::create_dir_all(temp.path().join("elsewhere")).unwrap();
        fs::write(source.join("cover.jpg"), [0xffu8, 0xd8, 0x00, 0x10]).unwrap();
        fs::write(source.join("2023/summer/beach.raw"), b"sand and sea").unwrap();
        fs::create_dir(source.join("2023/empty")).unwrap();

        copy_then_remove(&source, &destination).unwrap();

        assert!(!source.exists());
        assert_eq!(
            fs::read(destination.join("cover.jpg")).unwrap(),
            [0xffu8, 0xd8, 0x00, 0x10]
        );
        assert_eq!(
            fs::read(destination.join("2023/summer/beach.raw")).unwrap(),
            b"sand and sea"
        );
        assert!(destination.join("2023/empty").is_dir());
    }

    #[test]
    fn test_copy_then_remove_single_file() {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("note.txt");
        let destination = temp.path().join("moved.txt");
        fs::write(&source, b"remember").unwrap();

        copy_then_remove(&source, &destination).unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read(&destination).unwrap(), b"remember");
    }

    #[test]
    fn test_copy_then_remove_keeps_source_on_failure() {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("keep.txt");
        let destination = temp.path().join("box");
        fs::write(&source, b"precious").unwrap();
        fs::create_dir(&destination).unwrap();

        let err = copy_then_remove(&source, &destination).unwrap_err();

        assert_eq!(err.path(), destination);
        assert_eq!(fs::read(&source).unwrap(), b"precious");
    }

    #[cfg(unix)]
    #[test]
    fn test_mv_dangling_link() {
        let mut harness = Harness::new();
        let root = harness.root();
        std::os::unix::fs::symlink(root.join("missing"), root.join("link")).unwrap();

        harness.run("mv link renamed").unwrap();

        assert!(fs::symlink_metadata(root.join("link")).is_err());
        assert_eq!(fs::read_link(root.join("renamed")).unwrap(), root.join("missing"));
    }

    #[test]
    fn test_cross_device_detection() {
        assert!(!is_cross_device(&io::Error::new(io::ErrorKind::Other, "x")));
        #[cfg(unix)]
        assert!(is_cross_device(&io::Error::from_raw_os_error(libc::EXDEV)));
    }
}
