use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install JSON logging to stdout.
///
/// `RUST_LOG` wins when set; otherwise `default_directives` applies, e.g.
/// `"staffdesk_staff=info,tower_http=info"`. Only the first call installs a
/// subscriber.
pub fn init_tracing(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true).with_current_span(true))
        .try_init();
}
