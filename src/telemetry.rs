use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Why logging could not be set up
#[derive(Debug)]
pub enum TelemetryError {
    /// `--log-level` is not a valid filter directive
    InvalidLogLevel { level: String, source: ParseError },
    /// Another global subscriber was installed first
    AlreadyInitialized,
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidLogLevel { level, source } => {
                write!(f, "--log-level '{}' is not a valid filter: {}", level, source)
            }
            TelemetryError::AlreadyInitialized => f.write_str("logging was already initialized"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidLogLevel { source, .. } => Some(source),
            TelemetryError::AlreadyInitialized => None,
        }
    }
}

/// Pick the log filter: a valid `RUST_LOG` wins, otherwise `log_level`
fn log_filter(log_level: &str, rust_log: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = rust_log.and_then(|value| EnvFilter::try_new(value).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(log_level).map_err(|source| TelemetryError::InvalidLogLevel {
        level: log_level.to_string(),
        source,
    })
}

/// Install the global subscriber
/// Logs go to stderr so they never mix with the rendered directory
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(log_level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(false)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_level_used_without_rust_log() {
        let filter = log_filter("debug", None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_rust_log_overrides_log_level() {
        let filter = log_filter("warn", Some("reseller_core=trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_invalid_rust_log_falls_back() {
        let filter = log_filter("info", Some("reseller_core=loudly")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_invalid_log_level() {
        let err = log_filter("reseller_core=loudly", None).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("--log-level 'reseller_core=loudly' is not a valid filter"));
    }
}
