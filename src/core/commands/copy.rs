use std::fs;

use super::{Command, CommandError, CommandSpec, Context, Flow};
use crate::core::traversal;

static COPY: CommandSpec = CommandSpec {
    name: "cp",
    aliases: &["copy"],
    min_args: 2,
    usage: "cp <src> <dest>",
    summary: "copy a file or directory tree",
};

#[derive(Clone)]
pub struct CopyCommand;

impl Default for CopyCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CopyCommand {
    fn spec(&self) -> &'static CommandSpec {
        &COPY
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        let source = ctx.session.resolve(COPY.arg(args, 0)?);
        let destination = ctx.session.resolve(COPY.arg(args, 1)?);

        if fs::symlink_metadata(&source).is_err() {
            return Err(CommandError::NotFound(source));
        }
        if traversal::overlaps(&source, &destination) {
            return Err(CommandError::CopyIntoSelf(source));
        }

        let stats = traversal::copy_recursive(&source, &destination)?;
        let message = format!(
            "Copied {} -> {} ({} files, {} directories, {} bytes)",
            source.display(),
            destination.display(),
            stats.files,
            stats.directories,
            stats.bytes
        );
        writeln!(ctx.out, "{}", ctx.palette.success(&message))?;
        Ok(Flow::Continue)
    }
}
