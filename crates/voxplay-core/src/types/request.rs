//! Playback requests.

use std::path::{Path, PathBuf};

use super::volume::Volume;

/// One "play this file" call. Built per call and dropped when it returns.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRequest {
    /// Audio file to play.
    pub path: PathBuf,
    /// Playback volume, already clamped.
    pub volume: Volume,
    /// Remove the file once playback finishes, whatever the outcome.
    pub delete_after: bool,
}

impl PlaybackRequest {
    /// Request with the default volume (0.8) that deletes the file afterwards.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            volume: Volume::DEFAULT,
            delete_after: true,
        }
    }

    #[must_use]
    pub fn with_volume(mut self, volume: impl Into<Volume>) -> Self {
        self.volume = volume.into();
        self
    }

    #[must_use]
    pub const fn with_delete_after(mut self, delete_after: bool) -> Self {
        self.delete_after = delete_after;
        self
    }

    /// Keep the file after playback.
    #[must_use]
    pub const fn keep_file(self) -> Self {
        self.with_delete_after(false)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
