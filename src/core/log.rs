use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "fxconv";

fn levels(verbose: bool) -> (LevelFilter, &'static str) {
    if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::OFF, "off")
    }
}

/// Picks the filters for the subscriber.
///
/// A valid `rust_log` directive replaces the `--verbose` defaults entirely, so
/// the app target filter is only installed when it is absent.
fn filters(verbose: bool, rust_log: Option<&str>) -> (Option<Targets>, EnvFilter) {
    if let Some(env_filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return (None, env_filter);
    }
    let (level_filter, level) = levels(verbose);
    (
        Some(Targets::new().with_target(APP_TARGET, level_filter)),
        EnvFilter::new(level),
    )
}

/// Installs the global subscriber. Output goes to stderr so that tables and
/// cards on stdout stay clean. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (app_filter, env_filter) = filters(verbose, rust_log.as_deref());

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(app_filter)
        .with(env_filter)
        .init();
}
