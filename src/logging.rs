use tracing_subscriber::{
    fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter,
};

/// Installs a stderr `fmt` layer filtered by `RUST_LOG`, or by `default_level`
/// when `RUST_LOG` is unset or invalid.
///
/// Must be called at most once per process.
pub fn setup_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(fmt::format().with_target(false))
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
