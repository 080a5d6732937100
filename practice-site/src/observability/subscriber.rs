//! Subscriber bootstrap for hosts that want the crate's events on stderr.

use tracing::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Parses `env` as filter directives, falling back to `default_filter` when
/// it is unset or malformed.
fn filter_from(env: Option<&str>, default_filter: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}

fn env_filter(default_filter: &str) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), default_filter)
}

fn text_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish()
}

fn json_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .finish()
}

/// Installs a human-readable `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `false` when a
/// global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    text_subscriber(env_filter(default_filter)).try_init().is_ok()
}

/// Installs a JSON `fmt` subscriber, one object per event.
///
/// Same filter rules as [`init_tracing`].
pub fn init_json_tracing(default_filter: &str) -> bool {
    json_subscriber(env_filter(default_filter)).try_init().is_ok()
}
