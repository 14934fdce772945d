use std::io::{self, Stderr};

use tracing_subscriber::{layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::config::LoggingConfig;

/// Консольный слой с конфигурацией. Возвращаем boxed trait-объект,
/// чтобы стереть конкретный тип формата.
pub fn layer_with_config<S>(config: &LoggingConfig) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .with_writer(io::stderr as fn() -> Stderr)
        .boxed()
}
