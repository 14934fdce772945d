use serde::{Deserialize, Serialize};

/// Настройки логирования.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Уровень: trace | debug | info | warn | error.
    pub level: String,
    /// ANSI-цвета в консольном выводе.
    pub ansi: bool,
    /// Печатать ли target (модуль) в каждой строке.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
            with_target: false,
        }
    }
}

impl LoggingConfig {
    /// Директива фильтра из конфигурации, например `slovo=debug`.
    pub fn build_filter_directive(&self) -> String {
        format!("slovo={}", self.level)
    }
}
