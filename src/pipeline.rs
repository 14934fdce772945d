use std::{path::Path, sync::Arc};

use parking_lot::Mutex;
use tracing::debug;

use crate::{
    error::PipelineError,
    pubsub::{Broker, TextSummary},
    stages::{
        Aggregator, CharCountSink, FileSource, Sanitizer, WordCountSink, TOPIC_SUMMARY,
    },
};

/// Фасад связывания: собирает брокер и все стадии в рабочую топологию.
///
/// Подписки регистрируются один раз, здесь; во время запуска топология
/// не меняется. Сам фасад ничего не оркеструет: запуск — это один вызов
/// источника, всё остальное разворачивается через уведомления.
pub struct Pipeline {
    broker: Arc<Broker>,
    source: FileSource,
    /// Сводка, захваченная концевым подписчиком текущего запуска.
    last_summary: Arc<Mutex<Option<TextSummary>>>,
}

impl Pipeline {
    /// Строит топологию: sanitizer и оба счётчика fan-out'ом,
    /// агрегатор и захват сводки.
    pub fn new() -> Result<Self, PipelineError> {
        let broker = Arc::new(Broker::new());

        Sanitizer::attach(&broker)?;
        WordCountSink::attach(&broker)?;
        CharCountSink::attach(&broker)?;
        Aggregator::attach(&broker)?;

        let last_summary = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&last_summary);
        broker.subscribe_fn(TOPIC_SUMMARY, "summary-capture", move |event| {
            if let Some(summary) = event.payload.as_summary() {
                *captured.lock() = Some(summary);
            }
        })?;

        let source = FileSource::new(Arc::clone(&broker));
        debug!("pipeline wired");
        Ok(Self {
            broker,
            source,
            last_summary,
        })
    }

    /// Брокер топологии — для зондов в тестах и дополнительных подписок,
    /// регистрируемых до первого запуска.
    pub fn broker(&self) -> &Arc<Broker> {
        &self.broker
    }

    /// Один проход: чтение файла, синхронная раскрутка всех стадий,
    /// возврат сводки этого запуска.
    pub fn run(&self, path: &Path) -> Result<TextSummary, PipelineError> {
        self.last_summary.lock().take();
        let run = self.source.read(path)?;
        self.last_summary
            .lock()
            .take()
            .ok_or(PipelineError::MissingSummary { run })
    }
}
