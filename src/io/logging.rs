//! Diagnostic logging setup

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Progress of every stitched mosaic
    Normal,
    /// Folder discovery and ignored files as well
    Verbose,
}

impl Verbosity {
    /// Pick the verbosity from the `--quiet` and `--verbose` flags
    ///
    /// `--verbose` wins when both are given.
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (_, true) => Self::Verbose,
            (true, false) => Self::Quiet,
            (false, false) => Self::Normal,
        }
    }

    /// Default level when `RUST_LOG` is not set
    pub const fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::WARN,
            Self::Normal => LevelFilter::INFO,
            Self::Verbose => LevelFilter::DEBUG,
        }
    }
}

/// Filter honouring `RUST_LOG`, falling back to `verbosity`
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity.level().into())
        .from_env_lossy()
}

/// Install the global subscriber writing to stderr
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
