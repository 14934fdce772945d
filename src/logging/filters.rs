use tracing_subscriber::EnvFilter;

use crate::logging::config::LoggingConfig;

/// Строит `EnvFilter`: если задан `RUST_LOG` — используем его,
/// иначе директиву из конфигурации, иначе `info`.
pub fn build_filter_from_config(config: &LoggingConfig) -> EnvFilter {
    let directive = config.build_filter_directive();

    match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => match EnvFilter::try_new(&directive) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!(
                    "Invalid log filter directive from config ('{directive}'): {e}; falling back to 'info'"
                );
                EnvFilter::new("info")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет, что директива из конфигурации — корректный
    /// фильтр, без отката на `info`.
    #[test]
    fn test_config_directive_is_valid_filter() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        };
        let filter = EnvFilter::try_new(config.build_filter_directive()).unwrap();
        assert!(filter.to_string().contains("slovo"));
    }
}
