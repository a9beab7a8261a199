//! # voxplay-player
//!
//! Plays a short audio file through the host's native sound output by shelling
//! out to an installed command-line player, then optionally deletes the file.
//!
//! Players by platform:
//! - Windows: `PowerShell` `Media.SoundPlayer` (no volume control)
//! - macOS: `afplay`
//! - Linux: `paplay` (`PulseAudio`), falling back to `aplay` (ALSA)
//!
//! Playback is best-effort: every failure is logged and reported as `false`.

use std::path::Path;

use voxplay_core::PlaybackRequest;

pub mod dispatcher;
pub mod runner;

pub use dispatcher::Player;
pub use runner::{CommandRunner, RunOutcome, SystemRunner};

/// Play `path` at the default volume and delete it afterwards, suspending the current task.
pub async fn play_async(path: impl AsRef<Path>) -> bool {
    Player::system()
        .play_async(&PlaybackRequest::new(path.as_ref()))
        .await
}

/// Play `path` at the default volume and delete it afterwards, blocking the current thread.
pub fn play_blocking(path: impl AsRef<Path>) -> bool {
    Player::system().play_blocking(&PlaybackRequest::new(path.as_ref()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_missing_file_blocking() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!play_blocking(dir.path().join("missing.wav")));
    }

    #[tokio::test]
    async fn test_missing_file_async() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!play_async(dir.path().join("missing.wav")).await);
    }

    #[test]
    fn test_system_player_uses_current_platform() {
        assert_eq!(Player::system().platform(), voxplay_core::Platform::current());
    }
}
