use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the log line format (`json` unless set to `text`).
pub const LOG_FORMAT_VAR: &str = "SWAGGER_LOG_FORMAT";

/// Initialize structured logging.
///
/// - JSON lines by default, human readable text with `SWAGGER_LOG_FORMAT=text`.
/// - Level filtering through `RUST_LOG`, defaulting to `info`.
/// - `log` records are bridged into `tracing`.
///
/// Fails if a global subscriber is already installed (e.g. by a test).
pub fn init_telemetry(service_name: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let text = std::env::var(LOG_FORMAT_VAR)
        .map(|v| v.trim().eq_ignore_ascii_case("text"))
        .unwrap_or(false);

    if text {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    } else {
        // with_current_span + with_span_list put the request span (from
        // tracing-actix-web) on every line.
        let formatting_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(formatting_layer)
            .try_init()?;
    }

    // try_init already installs the bridge when tracing-subscriber's
    // tracing-log feature is on; this covers builds without it.
    let _ = tracing_log::LogTracer::init();

    tracing::info!(service.name = service_name, "telemetry initialized");
    Ok(())
}
