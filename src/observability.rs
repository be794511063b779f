use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the tracing subscriber with an env-filter and JSON output.
///
/// `RUST_LOG` takes precedence over the supplied default level.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let formatting_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .json()
        .flatten_event(true);

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .init();
}
