//! Command-line interface for batch stitching of position folders

use crate::io::configuration::{OVERLAP_X, OVERLAP_Y};
use crate::io::error::Result;
use crate::io::logging::Verbosity;
use crate::io::progress::ProgressManager;
use crate::stitching::batch::{
    BatchReport, BatchStitcher, NamingPolicy, StitchConfig, discover_position_folders,
    require_folder,
};
use crate::stitching::placement::Overlap;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "gridstitch")]
#[command(
    author,
    version,
    about = "Stitch 3x3 tile acquisitions into one mosaic per channel"
)]
/// Command-line arguments for the stitching tool
pub struct Cli {
    /// Folder containing the XY position subfolders
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Folder the stitched mosaics are written to
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    /// How output names are derived from position folder names
    #[arg(short, long, value_enum, default_value_t = NamingPolicy::default())]
    pub naming: NamingPolicy,

    /// Horizontal overlap between neighbouring tiles in pixels
    #[arg(short = 'x', long, default_value_t = OVERLAP_X)]
    pub overlap_x: u32,

    /// Vertical overlap between neighbouring tiles in pixels
    #[arg(short = 'y', long, default_value_t = OVERLAP_Y)]
    pub overlap_y: u32,

    /// Suppress progress output and per-mosaic messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Also report folder discovery and ignored files
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log verbosity implied by the flags
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Stitching settings implied by the flags
    pub const fn stitch_config(&self) -> StitchConfig {
        StitchConfig {
            overlap: Overlap {
                x: self.overlap_x,
                y: self.overlap_y,
            },
            naming: self.naming,
        }
    }
}

/// Orchestrates a batch run with progress tracking
pub struct StitchRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl StitchRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Stitch every position folder according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if either folder is missing or the source folder
    /// cannot be read; failures of single groups are only reported
    pub fn process(&mut self) -> Result<BatchReport> {
        let source = require_folder(self.cli.source.as_deref(), "source")?;
        let destination = require_folder(self.cli.destination.as_deref(), "destination")?;

        let start_time = Instant::now();
        let folders = discover_position_folders(&source)?;
        if folders.is_empty() {
            warn!(source = %source.display(), "No position folders found");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(folders.len());
        }

        let stitcher = BatchStitcher::new(&self.cli.stitch_config(), destination);
        let progress = &mut self.progress_manager;
        let report = stitcher.run(&folders, |index, folder| {
            if let Some(pm) = progress.as_mut() {
                pm.start_folder(index, folder);
            }
        });

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            folders = folders.len(),
            written = report.written(),
            skipped = report.skipped(),
            unreadable = report.failed_folders.len(),
            elapsed = ?start_time.elapsed(),
            "Stitching finished"
        );

        Ok(report)
    }
}
