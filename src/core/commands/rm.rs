use std::fs;
use std::io;

use super::{Command, CommandError, CommandSpec, Context, Flow};
use crate::core::error::PathContext;
use crate::core::FsError;

static RM: CommandSpec = CommandSpec {
    name: "rm",
    aliases: &[],
    min_args: 1,
    usage: "rm <file-or-dir>",
    summary: "remove a file or an empty directory",
};

#[derive(Clone)]
pub struct RmCommand;

impl Default for RmCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RmCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmCommand {
    fn spec(&self) -> &'static CommandSpec {
        &RM
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        let target = ctx.session.resolve(RM.arg(args, 0)?);

        // symlink_metadata so a link to a directory is removed as a link.
        let metadata = match fs::symlink_metadata(&target) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CommandError::NotFound(target));
            }
            Err(e) => return Err(FsError::io(target, e).into()),
        };

        if metadata.is_dir() {
            if fs::read_dir(&target).at(&target)?.next().is_some() {
                return Err(CommandError::DirectoryNotEmpty(target));
            }
            fs::remove_dir(&target).at(&target)?;
        } else {
            fs::remove_file(&target).at(&target)?;
        }

        let message = format!("Removed: {}", target.display());
        writeln!(ctx.out, "{}", ctx.palette.success(&message))?;
        Ok(Flow::Continue)
    }
}
