//! Running external player processes.

use std::future::Future;
use std::io;
use std::process::{Output, Stdio};

use tracing::debug;
use voxplay_core::{Error, PlayerCommand, Result};

/// What happened when a player command was launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The binary is not installed (or not on `PATH`).
    NotFound,
    /// The binary ran to completion.
    Exited {
        /// `None` when the process was killed by a signal.
        code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },
}

impl RunOutcome {
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Exited { code: Some(0), .. })
    }
}

/// Launches player commands and waits for them to exit.
///
/// `Err` is reserved for failures other than a missing binary, which is
/// reported as [`RunOutcome::NotFound`].
pub trait CommandRunner: Send + Sync {
    /// Run `command`, blocking the calling thread until it exits.
    fn run(&self, command: &PlayerCommand) -> Result<RunOutcome>;

    /// Run `command`, suspending the calling task until it exits.
    fn run_async(&self, command: &PlayerCommand)
        -> impl Future<Output = Result<RunOutcome>> + Send;
}

/// Runs commands as real OS processes.
///
/// Stdin is closed, stdout is discarded, stderr is captured.
/// No timeout is applied: a player that never exits blocks its caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &PlayerCommand) -> Result<RunOutcome> {
        debug!("Running {command}");
        let output = std::process::Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output();

        outcome_from(&command.program, output)
    }

    async fn run_async(&self, command: &PlayerCommand) -> Result<RunOutcome> {
        debug!("Spawning {command}");
        let output = tokio::process::Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await;

        outcome_from(&command.program, output)
    }
}

fn outcome_from(program: &str, output: io::Result<Output>) -> Result<RunOutcome> {
    match output {
        Ok(output) => Ok(RunOutcome::Exited {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RunOutcome::NotFound),
        Err(source) => Err(Error::Process {
            program: program.to_string(),
            source,
        }),
    }
}


#[cfg(all(test, unix))]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn shell(script: &str) -> PlayerCommand {
        PlayerCommand::new("sh").arg("-c").arg(script)
    }

    #[test]
    fn test_missing_binary_is_not_found() {
        let cmd = PlayerCommand::new("voxplay-test-no-such-player");
        assert_eq!(SystemRunner.run(&cmd).unwrap(), RunOutcome::NotFound);
    }

    #[test]
    fn test_exit_code_and_stderr_captured() {
        let outcome = SystemRunner.run(&shell("echo oops >&2; exit 3")).unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Exited {
                code: Some(3),
                stderr: "oops".to_string()
            }
        );
        assert!(!outcome.succeeded());
    }

    #[test]
    fn test_success() {
        let outcome = SystemRunner.run(&shell("echo ignored")).unwrap();
        assert!(outcome.succeeded());
    }

    #[tokio::test]
    async fn test_async_matches_blocking() {
        let cmd = shell("echo late >&2; exit 1");
        assert_eq!(
            SystemRunner.run_async(&cmd).await.unwrap(),
            SystemRunner.run(&cmd).unwrap()
        );

        let missing = PlayerCommand::new("voxplay-test-no-such-player");
        assert_eq!(
            SystemRunner.run_async(&missing).await.unwrap(),
            RunOutcome::NotFound
        );
    }
}
