use tracing::debug;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Filter used when the caller hands us something `EnvFilter` can't parse.
pub const DEFAULT_FILTER: &str = "info";

/// Build the `EnvFilter` for a verbosity string such as `debug` or `fp_graph=trace,info`.
///
/// An unparseable filter falls back to [`DEFAULT_FILTER`] rather than refusing to start.
pub fn env_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber. Log lines go to stderr so stdout stays clean for
/// command output.
pub fn setup(filter: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_span_events(FmtSpan::NONE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        debug!(filter, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[rstest]
    #[case("debug", LevelFilter::DEBUG)]
    #[case("fp_graph=trace", LevelFilter::TRACE)]
    #[case("fp_graph=notalevel", LevelFilter::INFO)]
    fn test_env_filter(#[case] input: &str, #[case] expected: LevelFilter) {
        assert_eq!(env_filter(input).max_level_hint(), Some(expected));
    }

    #[rstest]
    fn test_setup_twice_does_not_panic() {
        setup("warn");
        setup("debug");
    }
}
