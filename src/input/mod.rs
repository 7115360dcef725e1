mod completer;
mod reader;

pub use completer::ShellHelper;
pub use reader::{InteractiveInput, LineSource, ReadOutcome, ScriptInput};
