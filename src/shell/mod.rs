use std::io::{BufRead, Write};

mod executor;

use crate::{
    core::{
        commands::{CommandExecutor, Flow},
        Session,
    },
    error::ShellError,
    flags::Flags,
    highlight::Palette,
    input::{InteractiveInput, LineSource, ReadOutcome, ScriptInput, ShellHelper},
};

use executor::LineHandler;

const FAREWELL: &str = "Exiting File explorer, Goodbye!";
const INPUT_CLOSED: &str = "Input closed. Exiting.";

/// The read-eval-print loop. Owns the session and reads from any
/// [`LineSource`], so the same loop serves the terminal and scripted input.
pub struct Shell<I> {
    pub(crate) input: I,
    pub(crate) executor: CommandExecutor,
    pub(crate) session: Session,
    pub(crate) palette: Palette,
    pub(crate) quiet: bool,
}

impl Shell<InteractiveInput> {
    pub fn interactive(flags: &Flags) -> Result<Self, ShellError> {
        let palette = Palette::from_flag(flags.no_color);
        let executor = CommandExecutor::new();
        let session = Session::new()?;

        let helper = ShellHelper::new(&executor, palette, session.current_dir());
        let input = InteractiveInput::new(helper)?;

        // Ctrl-C outside line editing must not kill the process mid-command.
        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to leave the file explorer");
        })?;

        Ok(Self::with_parts(input, executor, session, palette, flags.quiet))
    }
}

impl<R: BufRead> Shell<ScriptInput<R>> {
    pub fn scripted(reader: R, flags: &Flags) -> Result<Self, ShellError> {
        let palette = Palette::from_flag(flags.no_color);
        Ok(Self::with_parts(
            ScriptInput::new(reader),
            CommandExecutor::new(),
            Session::new()?,
            palette,
            flags.quiet,
        ))
    }
}

impl<I: LineSource> Shell<I> {
    pub fn with_parts(
        input: I,
        executor: CommandExecutor,
        session: Session,
        palette: Palette,
        quiet: bool,
    ) -> Self {
        Shell {
            input,
            executor,
            session,
            palette,
            quiet,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `exit`, end of input, or an unreadable input stream.
    /// Command failures are printed to `err` and never end the loop.
    pub fn run(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), ShellError> {
        self.print_banner(out)?;

        loop {
            let prompt = format!("{}> ", self.session.current_dir().display());
            let outcome = match self.input.read_line(&prompt, self.session.current_dir()) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(error = %e, "input stream failed");
                    writeln!(err, "{}", self.palette.error(&format!("Error: {}", e)))?;
                    break;
                }
            };

            match outcome {
                ReadOutcome::Line(line) => {
                    if self.handle_line(&line, out, err)? == Flow::Exit {
                        self.say(out, FAREWELL)?;
                        break;
                    }
                }
                ReadOutcome::Interrupted => {
                    writeln!(out, "{}", self.palette.hint("Use 'exit' or Ctrl-D to leave"))?;
                }
                ReadOutcome::Eof => {
                    self.say(out, INPUT_CLOSED)?;
                    break;
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    fn print_banner(&self, out: &mut dyn Write) -> Result<(), ShellError> {
        if self.quiet {
            return Ok(());
        }
        writeln!(out, "File explorer CLI")?;
        writeln!(out, "Starting in: {}", self.session.current_dir().display())?;
        writeln!(out, "Type 'help' for commands.")?;
        writeln!(out)?;
        Ok(())
    }

    fn say(&self, out: &mut dyn Write, message: &str) -> Result<(), ShellError> {
        if !self.quiet {
            writeln!(out, "{}", message)?;
        }
        Ok(())
    }
}
