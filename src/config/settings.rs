use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Входной файл по умолчанию, если путь не передан аргументом.
    pub input_path: String,
    /// Уровень логирования по умолчанию.
    pub log_level: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            // Добавляем значения по умолчанию
            .set_default("input_path", "input.txt")?
            .set_default("log_level", "info")?
            // Добавляем переменные окружения с префиксом SLOVO_
            .add_source(Environment::with_prefix("SLOVO"))
            .build()?;

        // Десериализуем конфигурацию в нашу структуру.
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет значения по умолчанию.
    #[test]
    fn test_defaults() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.input_path, "input.txt");
        assert_eq!(settings.log_level, "info");
    }
}
