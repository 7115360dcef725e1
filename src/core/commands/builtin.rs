use super::{Command, CommandError, CommandSpec, Context, Flow};

pub(super) static HELP: CommandSpec = CommandSpec {
    name: "help",
    aliases: &[],
    min_args: 0,
    usage: "help [command]",
    summary: "show this help",
};

static EXIT: CommandSpec = CommandSpec {
    name: "exit",
    aliases: &[],
    min_args: 0,
    usage: "exit",
    summary: "exit the program",
};

static PWD: CommandSpec = CommandSpec {
    name: "pwd",
    aliases: &[],
    min_args: 0,
    usage: "pwd",
    summary: "print the current directory",
};

#[derive(Clone)]
pub struct HelpCommand {
    listed: Vec<&'static CommandSpec>,
}

impl HelpCommand {
    pub fn new(listed: Vec<&'static CommandSpec>) -> Self {
        Self { listed }
    }

    fn lookup(&self, name: &str) -> Option<&'static CommandSpec> {
        let name = name.to_lowercase();
        self.listed
            .iter()
            .copied()
            .find(|spec| spec.names().any(|n| n == name))
    }
}

impl Command for HelpCommand {
    fn spec(&self) -> &'static CommandSpec {
        &HELP
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        if let Some(spec) = args.first().and_then(|name| self.lookup(name)) {
            writeln!(ctx.out, "{}", ctx.palette.usage(spec.usage))?;
            writeln!(ctx.out, "  {}", spec.summary)?;
            if !spec.aliases.is_empty() {
                writeln!(ctx.out, "  aliases: {}", spec.aliases.join(", "))?;
            }
            return Ok(Flow::Continue);
        }

        writeln!(ctx.out, "Available commands:")?;
        for spec in &self.listed {
            let usage = match spec.aliases {
                [] => spec.usage.to_string(),
                aliases => format!("{} ({})", spec.usage, aliases.join(", ")),
            };
            writeln!(ctx.out, "  {:<28} {}", usage, spec.summary)?;
        }
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn spec(&self) -> &'static CommandSpec {
        &EXIT
    }

    fn execute(&self, _ctx: &mut Context<'_>, _args: &[String]) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}

#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn spec(&self) -> &'static CommandSpec {
        &PWD
    }

    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", ctx.session.current_dir().display())?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Harness;
    use super::*;

    #[test]
    fn test_help_lists_every_command() {
        let mut harness = Harness::new();
        assert_eq!(harness.run("help").unwrap(), Flow::Continue);
        let output = harness.take_output();

        assert!(output.starts_with("Available commands:"));
        for usage in [
            "help",
            "exit",
            "ls",
            "cd <dir>",
            "mkdir <dir>",
            "create <file>",
            "rm <file-or-dir>",
            "cp <src> <dest> (copy)",
            "mv <src> <dest> (move)",
            "info <file-or-dir>",
            "perm <file-or-dir>",
            "search <name>",
            "pwd",
        ] {
            assert!(output.contains(usage), "help is missing {}", usage);
        }
    }

    #[test]
    fn test_help_for_single_command() {
        let mut harness = Harness::new();
        harness.run("help COPY").unwrap();
        let output = harness.take_output();

        assert!(output.starts_with("cp <src> <dest>"));
        assert!(output.contains("aliases: copy"));
    }

    #[test]
    fn test_exit_returns_exit_flow() {
        let mut harness = Harness::new();
        assert_eq!(harness.run("exit").unwrap(), Flow::Exit);
        assert!(harness.take_output().is_empty());
    }

    #[test]
    fn test_pwd_prints_current_dir() {
        let mut harness = Harness::new();
        harness.run("pwd").unwrap();
        assert_eq!(
            harness.take_output(),
            format!("{}\n", harness.root().display())
        );
    }
}
