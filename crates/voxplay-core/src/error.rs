//! Error types for voxplay.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using voxplay's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for voxplay.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Audio file not found: {}", .0.display())]
    MissingInput(PathBuf),

    // Platform errors
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("{0} not found")]
    ToolNotFound(String),

    // Process errors
    #[error("Failed to run {program}: {source}")]
    Process {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}: {stderr}", describe_code(.code))]
    PlayerFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "no exit code".to_string(), |c| format!("exit code {c}"))
}

impl Error {
    /// Returns true if this error means the player binary is absent.
    pub fn is_missing_tool(&self) -> bool {
        match self {
            Self::ToolNotFound(_) => true,
            Self::Process { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_classification() {
        assert!(Error::ToolNotFound("aplay".into()).is_missing_tool());
        assert!(Error::Process {
            program: "paplay".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .is_missing_tool());
        assert!(!Error::Process {
            program: "paplay".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
        .is_missing_tool());
        assert!(!Error::Config("bad".into()).is_missing_tool());
        assert!(!Error::MissingInput(PathBuf::from("/tmp/x.wav")).is_missing_tool());
    }

    #[test]
    fn test_error_display() {
        let err = Error::PlayerFailed {
            program: "afplay".into(),
            code: Some(1),
            stderr: "Error: AudioFileOpen failed".into(),
        };
        assert_eq!(
            err.to_string(),
            "afplay exited with exit code 1: Error: AudioFileOpen failed"
        );

        let err = Error::PlayerFailed {
            program: "aplay".into(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "aplay exited with no exit code: ");

        let err = Error::UnsupportedPlatform("freebsd".into());
        assert_eq!(err.to_string(), "Unsupported platform: freebsd");
    }
}
