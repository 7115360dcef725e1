use tracing_subscriber::EnvFilter;

use crate::error::ShellError;
use crate::flags::Flags;

/// Installs the global stderr subscriber. The filter comes from the flags
/// only; `RUST_LOG` is not consulted.
pub fn init(flags: &Flags) -> Result<(), ShellError> {
    let filter = EnvFilter::try_new(format!("warn,burrow={}", flags.log_level()))
        .map_err(|e| ShellError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}
