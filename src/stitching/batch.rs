//! Batch stitching of every position folder under a source root
//!
//! Each channel group is stitched independently: a failure in one group is
//! recorded in the [`BatchReport`] and never stops its siblings or the
//! remaining folders.

use crate::io::configuration::{OUTPUT_PREFIX, POSITION_FOLDER_MARKER, RENAMED_PREFIX_LEN};
use crate::io::error::{Result, StitchError, WithPath};
use crate::stitching::compositor::Compositor;
use crate::stitching::loader::{ChannelTag, group_tiles, is_hidden};
use crate::stitching::placement::Overlap;
use clap::ValueEnum;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How a position folder name becomes the base name of its mosaics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NamingPolicy {
    /// Replace the first two characters with `A` (`XY01` becomes `A01`)
    #[default]
    ReplacePrefix,
    /// Use the folder name unchanged
    Keep,
}

impl NamingPolicy {
    /// Derive the output base name for a position folder
    pub fn base_name(self, folder_name: &str) -> String {
        match self {
            Self::ReplacePrefix => {
                let rest: String = folder_name.chars().skip(RENAMED_PREFIX_LEN).collect();
                format!("{OUTPUT_PREFIX}{rest}")
            }
            Self::Keep => folder_name.to_string(),
        }
    }
}

/// Settings for one batch run
#[derive(Debug, Clone, Default)]
pub struct StitchConfig {
    /// Overlap between neighbouring tiles
    pub overlap: Overlap,
    /// Output naming policy
    pub naming: NamingPolicy,
}

/// Result of stitching one channel group
#[derive(Debug)]
pub enum GroupOutcome {
    /// Mosaic written to the given path
    Written(PathBuf),
    /// Group skipped; nothing was written
    Skipped(StitchError),
}

/// Outcome of one channel group within a position folder
#[derive(Debug)]
pub struct GroupReport {
    /// Position folder the group came from
    pub folder: PathBuf,
    /// Channel of the group
    pub tag: ChannelTag,
    /// Name the mosaic was or would have been written under
    pub output_name: String,
    /// What happened
    pub outcome: GroupOutcome,
}

/// Everything that happened during a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-group outcomes in processing order
    pub groups: Vec<GroupReport>,
    /// Position folders that could not be scanned at all
    pub failed_folders: Vec<(PathBuf, StitchError)>,
}

impl BatchReport {
    /// Number of mosaics written
    pub fn written(&self) -> usize {
        self.groups
            .iter()
            .filter(|g| matches!(g.outcome, GroupOutcome::Written(_)))
            .count()
    }

    /// Number of groups skipped
    pub fn skipped(&self) -> usize {
        self.groups.len() - self.written()
    }
}

/// Validate a folder argument, treating an empty one as a cancelled prompt
///
/// # Errors
///
/// Returns [`StitchError::UserCancelled`] if `path` is empty
pub fn require_folder(path: Option<&Path>, prompt: &'static str) -> Result<PathBuf> {
    match path {
        Some(p) if !p.as_os_str().is_empty() => Ok(p.to_path_buf()),
        _ => Err(StitchError::UserCancelled { prompt }),
    }
}

/// List immediate subfolders of `root` whose name contains the position marker
///
/// Hidden folders are skipped. Folders are returned sorted by name.
///
/// # Errors
///
/// Returns an error if `root` cannot be read
pub fn discover_position_folders(root: &Path) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();
    for entry in std::fs::read_dir(root).with_path(root, "read directory")? {
        let path = entry.with_path(root, "read directory entry")?.path();
        let is_position = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| !is_hidden(name) && name.contains(POSITION_FOLDER_MARKER));
        if path.is_dir() && is_position {
            folders.push(path);
        } else {
            debug!(path = %path.display(), "Not a position folder, ignoring");
        }
    }
    folders.sort();
    Ok(folders)
}

/// Drives the loader and compositor over a whole source tree
#[derive(Debug, Clone)]
pub struct BatchStitcher {
    compositor: Compositor,
    naming: NamingPolicy,
    destination: PathBuf,
}

impl BatchStitcher {
    /// Create a stitcher writing into `destination`
    pub fn new(config: &StitchConfig, destination: PathBuf) -> Self {
        Self {
            compositor: Compositor::new(config.overlap),
            naming: config.naming,
            destination,
        }
    }

    /// Stitch every channel group of one position folder into `report`
    ///
    /// # Errors
    ///
    /// Returns an error if the folder cannot be read; group failures are
    /// recorded in the report instead
    pub fn stitch_folder(&self, folder: &Path, report: &mut BatchReport) -> Result<()> {
        let folder_name = folder
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base_name = self.naming.base_name(&folder_name);

        for group in group_tiles(folder)? {
            let output_name = group.output_name(&base_name);
            let result = self
                .compositor
                .stitch(group.paths, &self.destination, &output_name);
            let outcome = match result {
                Ok(path) => {
                    info!(output = %path.display(), "Stitched mosaic");
                    GroupOutcome::Written(path)
                }
                Err(e) => {
                    warn!(
                        output = %output_name,
                        folder = %folder.display(),
                        "Skipping group: {e}"
                    );
                    GroupOutcome::Skipped(e)
                }
            };

            report.groups.push(GroupReport {
                folder: folder.to_path_buf(),
                tag: group.tag,
                output_name,
                outcome,
            });
        }

        Ok(())
    }

    /// Stitch the given position folders in order
    ///
    /// `on_folder` is called before each folder is processed, with its index
    /// and path. Folders that cannot be read are recorded and skipped.
    pub fn run(
        &self,
        folders: &[PathBuf],
        mut on_folder: impl FnMut(usize, &Path),
    ) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, folder) in folders.iter().enumerate() {
            on_folder(index, folder);
            if let Err(e) = self.stitch_folder(folder, &mut report) {
                warn!(folder = %folder.display(), "Skipping folder: {e}");
                report.failed_folders.push((folder.clone(), e));
            }
        }

        report
    }
}
