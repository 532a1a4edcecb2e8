//! Classification of tile files into channel groups

use crate::io::configuration::{HIDDEN_ENTRY_PREFIX, TILE_EXTENSION};
use crate::io::error::{Result, WithPath};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Acquisition channel a tile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChannelTag {
    /// First fluorescence channel
    Ch1,
    /// Second fluorescence channel
    Ch2,
    /// Third fluorescence channel
    Ch3,
    /// Fourth fluorescence channel
    Ch4,
    /// Pre-rendered overlay of all channels
    Overlay,
}

impl ChannelTag {
    /// All tags in classification priority order
    pub const ALL: [Self; 5] = [Self::Ch1, Self::Ch2, Self::Ch3, Self::Ch4, Self::Overlay];

    /// Literal file-name marker of this channel
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Ch1 => "CH1",
            Self::Ch2 => "CH2",
            Self::Ch3 => "CH3",
            Self::Ch4 => "CH4",
            Self::Overlay => "Overlay",
        }
    }

    /// First tag, in priority order, whose marker appears in `file_name`
    pub fn classify(file_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| file_name.contains(tag.marker()))
    }
}

impl fmt::Display for ChannelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Tile paths of one channel within a position folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelGroup {
    /// Channel the tiles belong to
    pub tag: ChannelTag,
    /// Tile paths sorted by file name
    pub paths: Vec<PathBuf>,
}

impl ChannelGroup {
    /// Output name of this group for a given base name, e.g. `A01_CH1`
    pub fn output_name(&self, base_name: &str) -> String {
        format!(
            "{base_name}{}{}",
            crate::io::configuration::CHANNEL_SEPARATOR,
            self.tag
        )
    }
}

/// Partition the tile files of `folder` into one group per channel
///
/// Groups are returned in priority order and may be empty. Hidden files,
/// files without the tile extension and files without any channel marker
/// are ignored.
///
/// # Errors
///
/// Returns an error if the folder or one of its entries cannot be read
pub fn group_tiles(folder: &Path) -> Result<Vec<ChannelGroup>> {
    let mut groups: Vec<ChannelGroup> = ChannelTag::ALL
        .into_iter()
        .map(|tag| ChannelGroup {
            tag,
            paths: Vec::new(),
        })
        .collect();

    for entry in std::fs::read_dir(folder).with_path(folder, "read directory")? {
        let path = entry.with_path(folder, "read directory entry")?.path();
        if !path.is_file() || !has_tile_extension(&path) {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            debug!(file = %path.display(), "File name is not valid UTF-8, ignoring");
            continue;
        };
        // Includes AppleDouble companions such as `._XY01_CH1_001.tif`
        if is_hidden(file_name) {
            debug!(file = %path.display(), "Hidden file, ignoring");
            continue;
        }

        match ChannelTag::classify(file_name) {
            Some(tag) => {
                if let Some(group) = groups.iter_mut().find(|group| group.tag == tag) {
                    group.paths.push(path);
                }
            }
            None => debug!(file = %path.display(), "No channel marker, ignoring"),
        }
    }

    // Directory listing order is platform-defined; file names are not
    for group in &mut groups {
        group.paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(groups)
}

/// Whether a directory entry name denotes a hidden file or folder
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_ENTRY_PREFIX)
}

fn has_tile_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TILE_EXTENSION))
}
