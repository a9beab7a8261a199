//! Persistent player defaults.
//!
//! Stored as JSON in the platform config directory, e.g.
//! `~/.config/voxplay/config.json` on Linux.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{PlaybackRequest, Volume};

const CONFIG_FILE: &str = "config.json";

/// User-editable defaults applied to every playback request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Default volume, clamped on load.
    #[serde(default)]
    pub volume: Volume,
    /// Delete the audio file after playing it.
    #[serde(default = "default_delete_after")]
    pub delete_after: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

const fn default_delete_after() -> bool {
    true
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: Volume::DEFAULT,
            delete_after: default_delete_after(),
            log_filter: None,
        }
    }
}

impl PlayerConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "voxplay").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location. Falls back to defaults when there is no file.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
        };

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config at {}: {e}", path.display())))
    }

    /// Pretty JSON, suitable for writing a starter config.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a request for `path` using these defaults.
    pub fn request_for(&self, path: impl Into<PathBuf>) -> PlaybackRequest {
        PlaybackRequest::new(path)
            .with_volume(self.volume)
            .with_delete_after(self.delete_after)
    }
}
