use std::{
    fs,
    path::Path,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
};

use tracing::{debug, info};

use super::TOPIC_RAW;
use crate::{
    error::PipelineError,
    pubsub::{Broker, Notification, RunId},
};

/// Источник: единственная стадия с внешним вводом.
///
/// `read` выполняет одно чтение файла и публикует ровно одно уведомление
/// с сырым текстом. Отсутствующий файл — не ошибка: вместо текста
/// публикуется пустая строка, и конвейер доходит до нулевых счётчиков.
pub struct FileSource {
    broker: Arc<Broker>,
    /// Номер следующего запуска.
    next_run: AtomicU64,
    /// Флаг незавершённой публикации: повторный `read` изнутри
    /// разворачивающейся доставки отклоняется.
    in_flight: AtomicBool,
}

impl FileSource {
    pub fn new(broker: Arc<Broker>) -> Self {
        Self {
            broker,
            next_run: AtomicU64::new(1),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Читает файл и запускает один проход конвейера.
    ///
    /// Возвращает номер запуска, присвоенный этому проходу.
    /// Доставка всех уведомлений завершается до возврата.
    pub fn read(&self, path: &Path) -> Result<RunId, PipelineError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(PipelineError::SourceBusy);
        }

        let run = self.next_run.fetch_add(1, Ordering::Relaxed);
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %path.display(), %err, "input not readable, substituting empty text");
                String::new()
            }
        };
        info!(run, path = %path.display(), bytes = text.len(), "raw text loaded");

        self.broker
            .publish(Notification::text(TOPIC_RAW, run, Arc::from(text)));
        self.in_flight.store(false, Ordering::Release);
        Ok(run)
    }
}
