//! crates/logging/src/subscriber.rs
//! Global tracing subscriber installation.

use std::env;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::verbosity::VerbosityLevel;

/// Environment variable whose directives replace the verbosity-derived filter.
pub const LOG_ENV_VAR: &str = "REMOTE_URL_LOG";

/// Installs a formatter writing to standard error, filtered by `level`.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{VerbosityLevel, init_tracing};
///
/// init_tracing(VerbosityLevel::from_verbose_level(2))?;
/// tracing::debug!(target: "remote::url", "now visible");
/// ```
pub fn init_tracing(level: VerbosityLevel) -> Result<(), TryInitError> {
    init_tracing_with_writer(level, std::io::stderr)
}

/// Installs a formatter writing to `writer`, filtered by `level`.
///
/// Fails when a global subscriber has already been installed.
pub fn init_tracing_with_writer<W>(level: VerbosityLevel, writer: W) -> Result<(), TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = resolve_filter(level, env::var(LOG_ENV_VAR).ok().as_deref());
    let format = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
}

/// Builds the event filter, preferring a valid override over the level.
fn resolve_filter(level: VerbosityLevel, override_directive: Option<&str>) -> EnvFilter {
    override_directive
        .filter(|directive| !directive.trim().is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(level.directive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn level_drives_filter_without_override() {
        let filter = resolve_filter(VerbosityLevel::Debug, None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let quiet = resolve_filter(VerbosityLevel::Quiet, None);
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn valid_override_replaces_level() {
        let filter = resolve_filter(VerbosityLevel::Normal, Some("remote=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn blank_override_is_ignored() {
        let filter = resolve_filter(VerbosityLevel::Verbose, Some("  "));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn invalid_override_falls_back_to_level() {
        let filter = resolve_filter(VerbosityLevel::Normal, Some("remote=loud"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
