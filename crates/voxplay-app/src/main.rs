//! # voxplay
//!
//! Plays one audio file through the host's command-line player and exits
//! with status 0 on success, 1 on failure.

mod cli;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use tracing::{debug, info, warn};
use voxplay_core::{Platform, PlaybackRequest, PlayerConfig};
use voxplay_player::Player;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    if args.generate_config {
        println!("{}", PlayerConfig::default().to_json_pretty()?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &args.config {
        Some(path) => PlayerConfig::load_from(path),
        None => PlayerConfig::load(),
    }
    .context("Failed to load config")?;

    logging::init(&config, args.verbose);
    debug!("Starting voxplay v{}", env!("CARGO_PKG_VERSION"));

    let platform = Platform::current();
    if args.platform {
        let tools = platform.tools();
        if tools.is_empty() {
            println!("{platform}: unsupported");
        } else {
            println!("{platform}: {}", tools.join(" -> "));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let Some(file) = args.file.as_deref() else {
        anyhow::bail!("No audio file given");
    };
    if args.volume.is_some() && !platform.supports_volume() {
        warn!("Volume control is not available on {platform}; ignoring --volume");
    }
    let request = build_request(&config, &args, file);
    info!(
        "Playing {} at {} on {platform}",
        request.path.display(),
        request.volume
    );

    let player = Player::system();
    let played = if args.blocking {
        tokio::task::spawn_blocking(move || player.play_blocking(&request))
            .await
            .context("Playback thread panicked")?
    } else {
        player.play_async(&request).await
    };

    Ok(if played {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Config defaults, overridden by command-line flags.
fn build_request(config: &PlayerConfig, args: &Args, file: &std::path::Path) -> PlaybackRequest {
    let mut request = config.request_for(file);
    if let Some(volume) = args.volume {
        request = request.with_volume(volume);
    }
    if args.keep {
        request = request.keep_file();
    }
    request
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::path::Path;
    use voxplay_core::Volume;

    #[test]
    fn test_flags_override_config() {
        let config = PlayerConfig {
            volume: Volume::new(0.3),
            delete_after: true,
            log_filter: None,
        };
        let args = Args::try_parse_from(["voxplay", "x.wav", "--volume", "1.3", "--keep"]).unwrap();
        let request = build_request(&config, &args, Path::new("x.wav"));
        assert_eq!(request.volume, Volume::MAX);
        assert!(!request.delete_after);
    }

    #[test]
    fn test_config_defaults_apply() {
        let config = PlayerConfig {
            volume: Volume::new(0.3),
            delete_after: false,
            log_filter: None,
        };
        let args = Args::try_parse_from(["voxplay", "x.wav"]).unwrap();
        let request = build_request(&config, &args, Path::new("x.wav"));
        assert_eq!(request.volume, Volume::new(0.3));
        assert!(!request.delete_after);
    }
}
