//! Progress tracking over position folders

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FOLDER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Folders: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for a batch run
pub struct ProgressManager {
    bar: ProgressBar,
    started: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no work registered
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(FOLDER_STYLE.clone());
        Self { bar, started: 0 }
    }

    /// Register the number of position folders to process
    pub fn initialize(&mut self, folder_count: usize) {
        self.bar.set_length(folder_count as u64);
        self.bar.set_position(0);
        self.started = 0;
    }

    /// Mark the previous folder as done and show the next one
    pub fn start_folder(&mut self, index: usize, path: &Path) {
        self.bar.set_position(index as u64);
        self.started = index + 1;
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Number of folders started so far
    pub const fn started(&self) -> usize {
        self.started
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.set_position(self.started as u64);
        self.bar.finish_and_clear();
    }
}
