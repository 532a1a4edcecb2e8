//! CLI entry point for stitching tile acquisitions into mosaics

use clap::Parser;
use gridstitch::io::cli::{Cli, StitchRunner};
use gridstitch::io::logging::init_logging;
use tracing::error;

fn main() -> gridstitch::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());
    let mut runner = StitchRunner::new(cli);
    runner
        .process()
        .map(drop)
        .inspect_err(|e| error!("{e}"))
}
