//! Platform dispatch, Linux fallback, and temp-file cleanup.

use std::fs;
use std::path::Path;

use tracing::{debug, error, info, instrument, warn};
use voxplay_core::{Error, Platform, PlaybackRequest, PlayerCommand, Result};

use crate::runner::{CommandRunner, RunOutcome, SystemRunner};

/// Plays audio files with the platform's command-line player.
///
/// Every failure is logged and reported as `false`; nothing is returned to the
/// caller beyond pass/fail.
#[derive(Debug, Clone)]
pub struct Player<R = SystemRunner> {
    platform: Platform,
    runner: R,
}

impl Player<SystemRunner> {
    /// Player for the running OS, launching real processes.
    pub fn system() -> Self {
        Self::new(Platform::current().clone(), SystemRunner)
    }
}

impl Default for Player<SystemRunner> {
    fn default() -> Self {
        Self::system()
    }
}

impl<R: CommandRunner> Player<R> {
    pub const fn new(platform: Platform, runner: R) -> Self {
        Self { platform, runner }
    }

    pub const fn platform(&self) -> &Platform {
        &self.platform
    }

    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Play `request`, blocking the current thread until the player exits.
    #[instrument(skip_all, fields(path = %request.path.display()))]
    pub fn play_blocking(&self, request: &PlaybackRequest) -> bool {
        let Some(_cleanup) = Cleanup::arm(request) else {
            return false;
        };
        let Some(candidates) = self.plan(request) else {
            return false;
        };

        let chained = candidates.len() > 1;
        for command in &candidates {
            if self.settle(request, command, self.runner.run(command), chained) {
                return true;
            }
        }
        self.exhausted(chained)
    }

    /// Play `request`, suspending the current task until the player exits.
    #[instrument(skip_all, fields(path = %request.path.display()))]
    pub async fn play_async(&self, request: &PlaybackRequest) -> bool {
        let Some(_cleanup) = Cleanup::arm(request) else {
            return false;
        };
        let Some(candidates) = self.plan(request) else {
            return false;
        };

        let chained = candidates.len() > 1;
        for command in &candidates {
            let outcome = self.runner.run_async(command).await;
            if self.settle(request, command, outcome, chained) {
                return true;
            }
        }
        self.exhausted(chained)
    }

    /// Commands to try for this request, or `None` if the platform has no player.
    fn plan(&self, request: &PlaybackRequest) -> Option<Vec<PlayerCommand>> {
        if !self.platform.is_supported() {
            error!("{}", Error::UnsupportedPlatform(self.platform.to_string()));
            return None;
        }
        Some(self.platform.candidates(&request.path, request.volume))
    }

    /// Log one attempt's outcome. Returns true if playback succeeded.
    ///
    /// In a fallback chain, failures are expected and logged at debug level.
    fn settle(
        &self,
        request: &PlaybackRequest,
        command: &PlayerCommand,
        outcome: Result<RunOutcome>,
        chained: bool,
    ) -> bool {
        let failure = match outcome {
            Ok(RunOutcome::Exited { code: Some(0), .. }) => {
                info!(
                    "Played audio on {} using {}: {}",
                    self.platform,
                    command.program,
                    request.path.display()
                );
                return true;
            }
            Ok(RunOutcome::NotFound) => Error::ToolNotFound(command.program.clone()),
            Ok(RunOutcome::Exited { code, stderr }) => Error::PlayerFailed {
                program: command.program.clone(),
                code,
                stderr,
            },
            Err(e) => e,
        };

        if chained {
            debug!("{failure}, trying next...");
        } else if failure.is_missing_tool() {
            error!("{failure} - is this really {}?", self.platform);
        } else {
            error!("Audio playback failed: {failure}");
        }
        false
    }

    fn exhausted(&self, chained: bool) -> bool {
        if chained {
            error!(
                "No working audio player found on {} (tried {})",
                self.platform,
                self.platform.tools().join(", ")
            );
        }
        false
    }
}

/// Deletes the request's file when dropped, if the request asked for it.
///
/// Runs on every exit path after the existence check, including early returns,
/// unwinding panics and a dropped `play_async` future.
struct Cleanup<'a> {
    path: &'a Path,
    enabled: bool,
}

impl<'a> Cleanup<'a> {
    /// Check the input exists and arm cleanup. `None` if there is nothing to play.
    fn arm(request: &'a PlaybackRequest) -> Option<Self> {
        if !request.path.exists() {
            error!("{}", Error::MissingInput(request.path.clone()));
            return None;
        }
        Some(Self {
            path: &request.path,
            enabled: request.delete_after,
        })
    }
}

impl Drop for Cleanup<'_> {
    fn drop(&mut self) {
        if !self.enabled || !self.path.exists() {
            return;
        }
        match fs::remove_file(self.path) {
            Ok(()) => debug!("Deleted temp audio: {}", self.path.display()),
            Err(e) => warn!("Failed to delete temp audio {}: {e}", self.path.display()),
        }
    }
}
