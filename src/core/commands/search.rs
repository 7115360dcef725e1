use super::{Command, CommandError, CommandSpec, Context, Flow};
use crate::core::traversal;

static SEARCH: CommandSpec = CommandSpec {
    name: "search",
    aliases: &[],
    min_args: 1,
    usage: "search <name>",
    summary: "find entries named <name> below the current directory",
};

#[derive(Clone)]
pub struct SearchCommand;

impl Default for SearchCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SearchCommand {
    fn spec(&self) -> &'static CommandSpec {
        &SEARCH
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        let target = SEARCH.arg(args, 0)?;
        let root = ctx.session.current_dir().to_path_buf();

        // Matches are printed as they arrive; an error keeps what was printed.
        let mut found = 0usize;
        for hit in traversal::search(&root, target) {
            let hit = hit?;
            found += 1;
            if hit.is_dir {
                let path = hit.path.display().to_string();
                writeln!(ctx.out, "[DIR]  {}", ctx.palette.directory(&path))?;
            } else {
                writeln!(ctx.out, "[FILE] {}", hit.path.display())?;
            }
        }

        let summary = match found {
            0 => format!("No matches for '{}'", target),
            1 => "1 match found".to_string(),
            n => format!("{} matches found", n),
        };
        writeln!(ctx.out, "{}", ctx.palette.hint(&summary))?;
        Ok(Flow::Continue)
    }
}
