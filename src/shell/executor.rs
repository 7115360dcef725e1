use std::io::Write;

use crate::core::commands::{CommandError, Context, Flow};
use crate::error::ShellError;
use crate::input::LineSource;

pub(crate) trait LineHandler {
    fn handle_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow, ShellError>;
}

impl<I: LineSource> LineHandler for super::Shell<I> {
    fn handle_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow, ShellError> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let mut ctx = Context::new(&mut self.session, out, self.palette);
        let result = self.executor.execute_line(&mut ctx, line);

        match result {
            Ok(flow) => Ok(flow),
            Err(e @ CommandError::Usage(_)) => {
                writeln!(err, "{}", self.palette.usage(&e.to_string()))?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                tracing::debug!(line, error = %e, "command failed");
                writeln!(err, "{}", self.palette.error(&e.to_string()))?;
                Ok(Flow::Continue)
            }
        }
    }
}
