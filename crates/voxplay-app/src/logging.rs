//! `tracing` subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use voxplay_core::PlayerConfig;

const DEFAULT_FILTER: &str = "voxplay=info,voxplay_player=info";
const VERBOSE_FILTER: &str = "voxplay=debug,voxplay_player=debug,voxplay_core=debug";

/// Filter used when `RUST_LOG` is unset: `-v`, then the config file, then the default.
fn fallback_filter(config: &PlayerConfig, verbose: bool) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    config
        .log_filter
        .clone()
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber. Logs go to stderr.
pub fn init(config: &PlayerConfig, verbose: bool) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback_filter(config, verbose).into()),
        )
        .init();
}
