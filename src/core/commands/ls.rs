use std::fs;

use super::{Command, CommandError, CommandSpec, Context, Flow};
use crate::core::error::PathContext;

static LS: CommandSpec = CommandSpec {
    name: "ls",
    aliases: &[],
    min_args: 0,
    usage: "ls",
    summary: "list the current directory",
};

struct Listing {
    name: String,
    is_dir: bool,
    size: u64,
}

#[derive(Clone)]
pub struct LsCommand;

impl Default for LsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LsCommand {
    pub fn new() -> Self {
        Self
    }

    fn read_listing(&self, ctx: &Context<'_>) -> Result<Vec<Listing>, CommandError> {
        let dir = ctx.session.current_dir();
        let mut listing = Vec::new();

        for entry in fs::read_dir(dir).at(dir)? {
            let entry = entry.at(dir)?;
            let path = entry.path();
            // Follow links so a link to a directory lists as one.
            let metadata = fs::metadata(&path).or_else(|_| entry.metadata()).at(&path)?;
            listing.push(Listing {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: metadata.is_dir(),
                size: metadata.len(),
            });
        }

        listing.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
        Ok(listing)
    }
}

impl Command for LsCommand {
    fn spec(&self) -> &'static CommandSpec {
        &LS
    }

    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> Result<Flow, CommandError> {
        let listing = self.read_listing(ctx)?;

        if listing.is_empty() {
            writeln!(ctx.out, "{}", ctx.palette.hint("(empty)"))?;
            return Ok(Flow::Continue);
        }

        for item in listing {
            if item.is_dir {
                let name = format!("{}/", item.name);
                writeln!(ctx.out, "[DIR]  {}", ctx.palette.directory(&name))?;
            } else {
                writeln!(ctx.out, "[FILE] {} ({} bytes)", item.name, item.size)?;
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Harness;
    use super::*;

    #[test]
    fn test_ls_flags_directories() {
        let mut harness = Harness::new();
        let root = harness.root();
        fs::create_dir(root.join("zeta")).unwrap();
        fs::create_dir(root.join("alpha")).unwrap();
        fs::write(root.join("b.txt"), b"12345").unwrap();
        fs::write(root.join("a.txt"), b"").unwrap();

        harness.run("ls").unwrap();

        assert_eq!(
            harness.take_output(),
            "[DIR]  alpha/\n[DIR]  zeta/\n[FILE] a.txt (0 bytes)\n[FILE] b.txt (5 bytes)\n"
        );
    }

    #[test]
    fn test_ls_empty_directory() {
        let mut harness = Harness::new();
        harness.run("ls").unwrap();
        assert_eq!(harness.take_output(), "(empty)\n");
    }

    #[test]
    fn test_ls_ignores_extra_arguments() {
        let mut harness = Harness::new();
        fs::write(harness.root().join("only.txt"), b"x").unwrap();

        harness.run("ls -la elsewhere").unwrap();
        assert_eq!(harness.take_output(), "[FILE] only.txt (1 bytes)\n");
    }
}
