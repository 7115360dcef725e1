use std::fs;

use super::{Command, CommandError, CommandSpec, Context, Flow};
use crate::core::error::PathContext;

static MKDIR: CommandSpec = CommandSpec {
    name: "mkdir",
    aliases: &[],
    min_args: 1,
    usage: "mkdir <dir>",
    summary: "create a directory and any missing parents",
};

#[derive(Clone)]
pub struct MkdirCommand;

impl Default for MkdirCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn spec(&self) -> &'static CommandSpec {
        &MKDIR
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        let target = ctx.session.resolve(MKDIR.arg(args, 0)?);
        if target.exists() {
            return Err(CommandError::AlreadyExists(target));
        }

        fs::create_dir_all(&target).at(&target)?;
        let message = format!("Created directory: {}", target.display());
        writeln!(ctx.out, "{}", ctx.palette.success(&message))?;
        Ok(Flow::Continue)
    }
}
