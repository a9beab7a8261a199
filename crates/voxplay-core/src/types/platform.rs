//! Host platform detection and per-platform player strategies.

use std::path::Path;

use once_cell::sync::Lazy;

use super::command::PlayerCommand;
use super::volume::Volume;

static CURRENT: Lazy<Platform> = Lazy::new(Platform::detect);

/// Operating system family, which decides how audio gets played.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    /// `PowerShell` driving `Media.SoundPlayer`.
    Windows,
    /// `afplay`.
    MacOs,
    /// `paplay`, falling back to `aplay`.
    Linux,
    /// Anything else; carries the detected OS name.
    Unsupported(String),
}

impl Platform {
    /// Map an OS identifier (`std::env::consts::OS` or `uname`-style) to a platform.
    pub fn from_os(os: &str) -> Self {
        match os.to_ascii_lowercase().as_str() {
            "windows" => Self::Windows,
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Unsupported(os.to_string()),
        }
    }

    /// Detect the platform of the running process.
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// The process-wide platform, detected on first use.
    pub fn current() -> &'static Self {
        &CURRENT
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Unsupported(os) => os,
        }
    }

    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Whether the platform's player honours a volume argument.
    pub const fn supports_volume(&self) -> bool {
        matches!(self, Self::MacOs | Self::Linux)
    }

    /// Names of the tools tried, in order.
    pub const fn tools(&self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["powershell"],
            Self::MacOs => &["afplay"],
            Self::Linux => &["paplay", "aplay"],
            Self::Unsupported(_) => &[],
        }
    }

    /// Commands to try, in priority order. The first one that runs and exits 0 wins.
    ///
    /// Empty for unsupported platforms.
    pub fn candidates(&self, path: &Path, volume: Volume) -> Vec<PlayerCommand> {
        match self {
            Self::Windows => vec![PlayerCommand::new("powershell")
                .arg("-Command")
                .arg(sound_player_script(path))],
            Self::MacOs => vec![PlayerCommand::new("afplay")
                .arg("-v")
                .arg(volume.to_afplay_arg())
                .arg(path)],
            Self::Linux => vec![
                PlayerCommand::new("paplay")
                    .arg("--volume")
                    .arg(volume.to_pulse().to_string())
                    .arg(path),
                PlayerCommand::new("aplay").arg(path),
            ],
            Self::Unsupported(_) => Vec::new(),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// `PowerShell` snippet that plays `path` synchronously. Volume is not controllable here.
fn sound_player_script(path: &Path) -> String {
    // Single-quoted PowerShell literal: quotes are escaped by doubling.
    let quoted = path.to_string_lossy().replace('\'', "''");
    format!("(New-Object Media.SoundPlayer '{quoted}').PlaySync()")
}
