use std::io::{self, IsTerminal};

use burrow::error::ShellError;
use burrow::flags::Flags;
use burrow::logging;
use burrow::shell::Shell;
use clap::Parser;

fn main() {
    let flags = Flags::parse();
    if let Err(e) = logging::init(&flags) {
        eprintln!("burrow: {}", e);
    }

    // Failures are reported, never turned into a non-zero exit status.
    if let Err(e) = run(&flags) {
        tracing::error!(error = %e, "shell stopped");
        eprintln!("burrow: {}", e);
    }
}

fn run(flags: &Flags) -> Result<(), ShellError> {
    let mut out = io::stdout();
    let mut err = io::stderr();

    if io::stdin().is_terminal() {
        Shell::interactive(flags)?.run(&mut out, &mut err)
    } else {
        Shell::scripted(io::stdin().lock(), flags)?.run(&mut out, &mut err)
    }
}
