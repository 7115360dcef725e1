use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

mod builtin;
mod cd;
mod copy;
mod create;
mod info;
mod ls;
mod mkdir;
mod mv;
mod rm;
mod search;

pub use builtin::{ExitCommand, HelpCommand, PwdCommand};
pub use cd::CdCommand;
pub use copy::CopyCommand;
pub use create::CreateCommand;
pub use info::{InfoCommand, PermCommand};
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use mv::MoveCommand;
pub use rm::RmCommand;
pub use search::SearchCommand;

use crate::core::{FsError, Session};
use crate::highlight::Palette;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("directory not empty: {}", .0.display())]
    DirectoryNotEmpty(PathBuf),
    #[error("cannot copy {} into itself", .0.display())]
    CopyIntoSelf(PathBuf),
    #[error(transparent)]
    Fs(FsError),
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl From<FsError> for CommandError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => CommandError::NotFound(path),
            other => CommandError::Fs(other),
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Static description of a built-in: its names, arity and help line.
#[derive(Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Positional arguments required after the command name.
    pub min_args: usize,
    pub usage: &'static str,
    pub summary: &'static str,
}

impl CommandSpec {
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        std::iter::once(self.name).chain(aliases.iter().copied())
    }

    /// Positional argument `index`, or this command's usage error.
    pub fn arg<'a>(&self, args: &'a [String], index: usize) -> Result<&'a str, CommandError> {
        args.get(index)
            .map(String::as_str)
            .ok_or(CommandError::Usage(self.usage))
    }
}

/// Everything a command may touch while it runs.
pub struct Context<'a> {
    pub session: &'a mut Session,
    pub out: &'a mut dyn Write,
    pub palette: Palette,
}

impl<'a> Context<'a> {
    pub fn new(session: &'a mut Session, out: &'a mut dyn Write, palette: Palette) -> Self {
        Self {
            session,
            out,
            palette,
        }
    }
}

pub trait Command {
    fn spec(&self) -> &'static CommandSpec;
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Help(HelpCommand),
    Exit(ExitCommand),
    Ls(LsCommand),
    Cd(CdCommand),
    Mkdir(MkdirCommand),
    Create(CreateCommand),
    Rm(RmCommand),
    Copy(CopyCommand),
    Move(MoveCommand),
    Info(InfoCommand),
    Perm(PermCommand),
    Search(SearchCommand),
    Pwd(PwdCommand),
}

impl Command for CommandType {
    fn spec(&self) -> &'static CommandSpec {
        match self {
            CommandType::Help(cmd) => cmd.spec(),
            CommandType::Exit(cmd) => cmd.spec(),
            CommandType::Ls(cmd) => cmd.spec(),
            CommandType::Cd(cmd) => cmd.spec(),
            CommandType::Mkdir(cmd) => cmd.spec(),
            CommandType::Create(cmd) => cmd.spec(),
            CommandType::Rm(cmd) => cmd.spec(),
            CommandType::Copy(cmd) => cmd.spec(),
            CommandType::Move(cmd) => cmd.spec(),
            CommandType::Info(cmd) => cmd.spec(),
            CommandType::Perm(cmd) => cmd.spec(),
            CommandType::Search(cmd) => cmd.spec(),
            CommandType::Pwd(cmd) => cmd.spec(),
        }
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        match self {
            CommandType::Help(cmd) => cmd.execute(ctx, args),
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
            CommandType::Ls(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Mkdir(cmd) => cmd.execute(ctx, args),
            CommandType::Create(cmd) => cmd.execute(ctx, args),
            CommandType::Rm(cmd) => cmd.execute(ctx, args),
            CommandType::Copy(cmd) => cmd.execute(ctx, args),
            CommandType::Move(cmd) => cmd.execute(ctx, args),
            CommandType::Info(cmd) => cmd.execute(ctx, args),
            CommandType::Perm(cmd) => cmd.execute(ctx, args),
            CommandType::Search(cmd) => cmd.execute(ctx, args),
            CommandType::Pwd(cmd) => cmd.execute(ctx, args),
        }
    }
}

/// Name-to-command lookup table. Names are matched lower-cased; arguments
/// are passed through untouched.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    specs: Vec<&'static CommandSpec>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
            specs: Vec::new(),
        };

        executor.register(CommandType::Exit(ExitCommand::new()));
        executor.register(CommandType::Ls(LsCommand::new()));
        executor.register(CommandType::Cd(CdCommand::new()));
        executor.register(CommandType::Mkdir(MkdirCommand::new()));
        executor.register(CommandType::Create(CreateCommand::new()));
        executor.register(CommandType::Rm(RmCommand::new()));
        executor.register(CommandType::Copy(CopyCommand::new()));
        executor.register(CommandType::Move(MoveCommand::new()));
        executor.register(CommandType::Info(InfoCommand::new()));
        executor.register(CommandType::Perm(PermCommand::new()));
        executor.register(CommandType::Search(SearchCommand::new()));
        executor.register(CommandType::Pwd(PwdCommand::new()));

        // Help lists everything registered before it, itself first.
        let mut listed = vec![&builtin::HELP];
        listed.extend(executor.specs.iter().copied());
        executor.register(CommandType::Help(HelpCommand::new(listed)));

        executor
    }

    fn register(&mut self, command: CommandType) {
        let spec = command.spec();
        for name in spec.names() {
            self.commands.insert(name, command.clone());
        }
        self.specs.push(spec);
    }

    /// Splits `line` on whitespace and runs it. Blank lines do nothing.
    pub fn execute_line(&self, ctx: &mut Context<'_>, line: &str) -> Result<Flow, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<String> = tokens.map(String::from).collect();
        self.execute(ctx, command, &args)
    }

    pub fn execute(
        &self,
        ctx: &mut Context<'_>,
        command: &str,
        args: &[String],
    ) -> Result<Flow, CommandError> {
        let name = command.to_lowercase();
        let Some(cmd) = self.commands.get(name.as_str()) else {
            debug!(command = %name, "unrecognized command");
            echo_unrecognized(ctx, &name, args)?;
            return Ok(Flow::Continue);
        };

        let spec = cmd.spec();
        if args.len() < spec.min_args {
            return Err(CommandError::Usage(spec.usage));
        }

        debug!(command = spec.name, ?args, "dispatching");
        cmd.execute(ctx, args)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command.to_lowercase().as_str())
    }

    /// Every accepted command name, aliases included, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn spec_for(&self, command: &str) -> Option<&'static CommandSpec> {
        self.commands
            .get(command.to_lowercase().as_str())
            .map(|cmd| cmd.spec())
    }
}

fn echo_unrecognized(ctx: &mut Context<'_>, name: &str, args: &[String]) -> io::Result<()> {
    writeln!(ctx.out, "Command received: {}", name)?;
    if args.is_empty() {
        writeln!(ctx.out, "No arguments.")?;
    } else {
        let joined: String = args.iter().map(|arg| format!("[{}]", arg)).collect();
        writeln!(ctx.out, "Arguments:{}", joined)?;
    }
    writeln!(
        ctx.out,
        "{}",
        ctx.palette.hint("(Command not implemented yet - continue)")
    )
}
