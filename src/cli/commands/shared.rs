//! Shared components for CLI commands

use crate::config::ChannelMap;
use crate::Result;
use std::path::Path;
use tracing::debug;

/// Set up structured logging at the given level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("motorlog_analyzer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the channel map: from a JSON file when given, otherwise the default
/// logger export layout
pub fn load_channel_map(mapping: Option<&Path>) -> Result<ChannelMap> {
    match mapping {
        Some(path) => {
            debug!("Loading channel mapping from {}", path.display());
            ChannelMap::from_json_file(path)
        }
        None => Ok(ChannelMap::default()),
    }
}
