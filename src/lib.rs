// textpatch - replace one literal block of text in a file, in place

pub mod config;
pub mod diff;
pub mod error;
pub mod patch;
pub mod utils;

use anyhow::Result;
use tracing::debug;

pub use error::{PatchError, PatchResult};
pub use patch::{apply, PatchOptions, PatchOutcome, Patcher};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output
/// and the default only shows warnings.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "textpatch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    debug!("Initializing textpatch v{}", version());
    Ok(())
}
