use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

#[derive(thiserror::Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to set logger")]
    Logger(#[from] tracing_log::log_tracer::SetLoggerError),
    #[error("Failed to set global subscriber")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs a bunyan-formatted subscriber writing to `sink`.
/// `RUST_LOG` takes precedence over `env_filter` when set.
pub fn init_logging<Sink>(name: &str, env_filter: &str, sink: Sink) -> Result<(), TelemetryError>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name.into(), sink);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
