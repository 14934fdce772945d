use thiserror::Error;

use crate::pubsub::RunId;

use super::WiringError;

/// Ошибка выполнения конвейера.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("wiring error: {0}")]
    Wiring(#[from] WiringError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("source is already publishing, re-entrant read refused")]
    SourceBusy,

    #[error("run {run} finished without an aggregated summary")]
    MissingSummary { run: RunId },
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет преобразование ошибки связывания в ошибку конвейера.
    #[test]
    fn test_wiring_error_conversion() {
        let err: PipelineError = WiringError::EmptyTopicName.into();
        assert!(matches!(err, PipelineError::Wiring(_)));
        assert_eq!(err.to_string(), "wiring error: topic name must not be empty");
    }

    /// Тест проверяет текст ошибки про незавершённый запуск.
    #[test]
    fn test_missing_summary_message() {
        let err = PipelineError::MissingSummary { run: 3 };
        assert_eq!(
            err.to_string(),
            "run 3 finished without an aggregated summary"
        );
    }
}
