//! Логирование стадий конвейера.
//!
//! - `config`: настройки уровня и формата консольного вывода.
//! - `filters` (приватный): построение `EnvFilter` (`RUST_LOG` имеет
//!   приоритет над конфигурацией).
//! - `sinks`: слои вывода (консоль, stderr).

pub mod config;
mod filters;
pub mod sinks;

pub use self::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация логирования с конфигурацией.
///
/// Логи уходят в stderr: stdout зарезервирован под итоговую сводку.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = filters::build_filter_from_config(config);
    let console_sink = sinks::console::layer_with_config(config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_sink)
        .init();
}
