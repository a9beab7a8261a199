//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// voxplay - play a short audio file through the system's native player
#[derive(Parser, Debug)]
#[command(name = "voxplay", version, about)]
pub struct Args {
    /// Audio file to play
    #[arg(required_unless_present_any = ["platform", "generate_config"])]
    pub file: Option<PathBuf>,

    /// Playback volume from 0.0 to 1.0 (clamped; ignored on Windows)
    #[arg(long)]
    pub volume: Option<f32>,

    /// Keep the file after playing (default: delete it)
    #[arg(long, short = 'k')]
    pub keep: bool,

    /// Block a worker thread instead of awaiting the player process
    #[arg(long)]
    pub blocking: bool,

    /// Config file (default: platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print the detected platform and the players it will try
    #[arg(long)]
    pub platform: bool,

    /// Print a default config.json to stdout
    #[arg(long)]
    pub generate_config: bool,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_file_required() {
        assert!(Args::try_parse_from(["voxplay"]).is_err());
        assert!(Args::try_parse_from(["voxplay", "--platform"]).is_ok());
        assert!(Args::try_parse_from(["voxplay", "--generate-config"]).is_ok());
    }

    #[test]
    fn test_play_args() {
        let args =
            Args::try_parse_from(["voxplay", "/tmp/x.wav", "--volume", "1.3", "-k", "--blocking"])
                .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("/tmp/x.wav")));
        assert_eq!(args.volume, Some(1.3));
        assert!(args.keep);
        assert!(args.blocking);
        assert!(!args.verbose);
    }

    #[test]
    fn test_negative_volume_parses() {
        let args = Args::try_parse_from(["voxplay", "a.wav", "--volume=-0.5"]).unwrap();
        assert_eq!(args.volume, Some(-0.5));
    }
}
