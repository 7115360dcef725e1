use std::fs::OpenOptions;
use std::io;

use super::{Command, CommandError, CommandSpec, Context, Flow};
use crate::core::FsError;

static CREATE: CommandSpec = CommandSpec {
    name: "create",
    aliases: &[],
    min_args: 1,
    usage: "create <file>",
    summary: "create an empty file",
};

#[derive(Clone)]
pub struct CreateCommand;

impl Default for CreateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CreateCommand {
    fn spec(&self) -> &'static CommandSpec {
        &CREATE
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        let target = ctx.session.resolve(CREATE.arg(args, 0)?);
        if target.exists() {
            return Err(CommandError::AlreadyExists(target));
        }

        match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(CommandError::AlreadyExists(target));
            }
            Err(e) => return Err(FsError::io(target, e).into()),
        }

        let message = format!("Created file: {}", target.display());
        writeln!(ctx.out, "{}", ctx.palette.success(&message))?;
        Ok(Flow::Continue)
    }
}
