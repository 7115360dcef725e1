use clap::Parser;

/// Command-line switches accepted by the `burrow` binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "burrow", version, about = "Interactive file explorer shell")]
pub struct Flags {
    /// Suppress the banner and farewell messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug output on stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Never emit colour escape sequences
    #[arg(long)]
    pub no_color: bool,
}

impl Flags {
    /// Log filter directive implied by the flags.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
