use thiserror::Error;

/// Ошибка связывания конвейера.
///
/// Возникает только при построении топологии: это дефект программы,
/// а не условие времени выполнения, поэтому отклоняется сразу,
/// а не при первом использовании.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    #[error("topic name must not be empty")]
    EmptyTopicName,
}
