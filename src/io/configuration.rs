//! Acquisition constants and runtime configuration defaults

// Grid geometry of a single acquisition
/// Number of tiles along each side of the acquisition grid
pub const GRID_ARITY: usize = 3;
/// Number of tiles that make up one complete mosaic
pub const TILE_COUNT: usize = GRID_ARITY * GRID_ARITY;

// Calibrated to the microscope stage step, not derived from pixel content
/// Horizontal overlap between neighbouring tiles in pixels
pub const OVERLAP_X: u32 = 289;
/// Vertical overlap between neighbouring tiles in pixels
pub const OVERLAP_Y: u32 = 216;

/// Raw acquisition index feeding each grid slot (row-major)
///
/// The middle row is acquired right to left, so raw 3 and raw 5 trade places.
pub const RAW_TO_GRID: [usize; TILE_COUNT] = [0, 1, 2, 5, 4, 3, 6, 7, 8];

// Input conventions
/// Substring identifying a position folder under the source root
pub const POSITION_FOLDER_MARKER: &str = "XY";
/// Extension of acquired tile files, matched case-insensitively
pub const TILE_EXTENSION: &str = "tif";
/// Leading character of hidden entries, which are never listed
pub const HIDDEN_ENTRY_PREFIX: char = '.';
/// Number of leading folder-name characters replaced when deriving output names
pub const RENAMED_PREFIX_LEN: usize = 2;
/// Replacement for the leading folder-name characters
pub const OUTPUT_PREFIX: &str = "A";

// Output settings
/// Extension of written mosaics
pub const OUTPUT_EXTENSION: &str = "png";
/// Separator between the base name and the channel tag
pub const CHANNEL_SEPARATOR: &str = "_";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
