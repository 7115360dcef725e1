use super::{Command, CommandError, CommandSpec, Context, Flow};
use crate::core::inspect::{self, Access};

static INFO: CommandSpec = CommandSpec {
    name: "info",
    aliases: &[],
    min_args: 1,
    usage: "info <file-or-dir>",
    summary: "show type, size and modification date",
};

static PERM: CommandSpec = CommandSpec {
    name: "perm",
    aliases: &[],
    min_args: 1,
    usage: "perm <file-or-dir>",
    summary: "show read/write/execute permissions",
};

#[derive(Clone)]
pub struct InfoCommand;

impl Default for InfoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for InfoCommand {
    fn spec(&self) -> &'static CommandSpec {
        &INFO
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        let target = ctx.session.resolve(INFO.arg(args, 0)?);
        let entry = inspect::info(&target)?;

        writeln!(ctx.out, "Name:     {}", entry.name)?;
        writeln!(ctx.out, "Type:     {}", entry.kind)?;
        if let Some(size) = entry.size {
            writeln!(ctx.out, "Size:     {} bytes", size)?;
        }
        writeln!(ctx.out, "Modified: {}", entry.modified.format("%Y-%m-%d"))?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct PermCommand;

impl Default for PermCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PermCommand {
    pub fn new() -> Self {
        Self
    }
}

fn yes_no(set: bool) -> &'static str {
    if set {
        "yes"
    } else {
        "no"
    }
}

fn describe(access: Access) -> String {
    format!(
        "read: {:<3}  write: {:<3}  execute: {}",
        yes_no(access.read),
        yes_no(access.write),
        yes_no(access.execute)
    )
}

impl Command for PermCommand {
    fn spec(&self) -> &'static CommandSpec {
        &PERM
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        let target = ctx.session.resolve(PERM.arg(args, 0)?);
        let flags = inspect::permissions(&target)?;

        writeln!(ctx.out, "Permissions for {}: {}", target.display(), flags)?;
        for (label, access) in flags.classes() {
            writeln!(ctx.out, "  {:<7} {}", label, describe(access))?;
        }
        Ok(Flow::Continue)
    }
}
