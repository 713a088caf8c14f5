//! Log output for the `barista` binary.

use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a stdout subscriber capped at `max_level`.
///
/// Fails if a global subscriber is already installed.
pub fn init(max_level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
