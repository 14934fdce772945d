use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use super::{TOPIC_CHARS, TOPIC_SUMMARY, TOPIC_WORDS};
use crate::{
    error::WiringError,
    pubsub::{Broker, Notification, RunId, Subscriber, TextSummary},
};

/// Слот частичного результата.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Words,
    Chars,
}

/// Состояние сбора: номер текущего запуска и два опциональных слота.
///
/// Переход `try_complete` — единственное место, где рождается сводка:
/// она возникает тогда и только тогда, когда заполнены оба слота,
/// и в том же переходе слоты очищаются.
#[derive(Debug, Default)]
struct Slots {
    /// Самый новый запуск, от которого принят частичный результат.
    /// Не сбрасывается при завершении: опоздавшие результаты
    /// более старых запусков отклоняются.
    run: Option<RunId>,
    words: Option<usize>,
    chars: Option<usize>,
}

impl Slots {
    /// Принимает частичный результат. Возвращает `false`, если результат
    /// относится к устаревшему запуску и отброшен.
    ///
    /// Более новый запуск вытесняет недособранное состояние старого;
    /// повторный результат того же запуска перезаписывает слот.
    fn accept(&mut self, run: RunId, slot: Slot, value: usize) -> bool {
        match self.run {
            Some(current) if run < current => return false,
            Some(current) if run > current => {
                self.words = None;
                self.chars = None;
                self.run = Some(run);
            }
            _ => self.run = Some(run),
        }
        match slot {
            Slot::Words => self.words = Some(value),
            Slot::Chars => self.chars = Some(value),
        }
        true
    }

    /// Если оба слота заполнены — отдаёт сводку и очищает слоты
    /// в том же переходе, иначе `None`.
    fn try_complete(&mut self) -> Option<TextSummary> {
        let (words, chars) = (self.words?, self.chars?);
        self.words = None;
        self.chars = None;
        Some(TextSummary { words, chars })
    }
}

/// Агрегатор: единственная стадия с состоянием.
///
/// Подписан на обе темы счётчиков; публикует сводку ровно один раз
/// на запуск — когда собраны оба частичных результата.
pub struct Aggregator {
    broker: Arc<Broker>,
    slots: Mutex<Slots>,
}

impl Aggregator {
    /// Создаёт агрегатор и подписывает его на темы счётчиков.
    pub fn attach(broker: &Arc<Broker>) -> Result<Arc<Self>, WiringError> {
        let stage = Arc::new(Self {
            broker: Arc::clone(broker),
            slots: Mutex::new(Slots::default()),
        });
        broker.subscribe(TOPIC_WORDS, stage.clone())?;
        broker.subscribe(TOPIC_CHARS, stage.clone())?;
        Ok(stage)
    }

    #[cfg(test)]
    fn slot_state(&self) -> (Option<usize>, Option<usize>) {
        let slots = self.slots.lock();
        (slots.words, slots.chars)
    }
}

impl Subscriber for Aggregator {
    fn name(&self) -> &str {
        "aggregator"
    }

    fn on_notification(&self, event: &Notification) {
        let Some(value) = event.payload.as_count() else {
            warn!(topic = %event.topic, run = event.run, "non-count payload ignored");
            return;
        };
        let slot = match event.topic.as_ref() {
            TOPIC_WORDS => Slot::Words,
            TOPIC_CHARS => Slot::Chars,
            _ => return,
        };

        // Сводка извлекается под замком, публикуется после его
        // освобождения: подписчик сводки может синхронно начать
        // следующий запуск.
        let completed = {
            let mut slots = self.slots.lock();
            if !slots.accept(event.run, slot, value) {
                warn!(topic = %event.topic, run = event.run, "stale run result rejected");
                return;
            }
            slots.try_complete()
        };

        if let Some(summary) = completed {
            info!(run = event.run, %summary, "aggregation complete");
            self.broker
                .publish(Notification::summary(TOPIC_SUMMARY, event.run, summary));
        }
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    fn summary_probe(broker: &Arc<Broker>) -> Arc<Mutex<Vec<Notification>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let probe = seen.clone();
        broker
            .subscribe_fn(TOPIC_SUMMARY, "summary-probe", move |event| {
                probe.lock().push(event.clone());
            })
            .unwrap();
        seen
    }

    /// Проверяет переход try_complete в изоляции от pub/sub-машинерии:
    /// сводка появляется только при двух заполненных слотах
    /// и слоты очищаются тем же переходом.
    #[test]
    fn test_slots_try_complete() {
        let mut slots = Slots::default();

        assert!(slots.accept(1, Slot::Words, 3));
        assert_eq!(slots.try_complete(), None);

        assert!(slots.accept(1, Slot::Chars, 16));
        assert_eq!(
            slots.try_complete(),
            Some(TextSummary { words: 3, chars: 16 })
        );

        // слоты пусты, повторное завершение невозможно
        assert_eq!(slots.try_complete(), None);
        assert_eq!(slots.words, None);
        assert_eq!(slots.chars, None);
    }

    /// Проверяет перезапись слота в рамках одного запуска:
    /// последний результат побеждает.
    #[test]
    fn test_slots_last_write_wins() {
        let mut slots = Slots::default();
        assert!(slots.accept(1, Slot::Words, 3));
        assert!(slots.accept(1, Slot::Words, 7));
        assert!(slots.accept(1, Slot::Chars, 16));
        assert_eq!(
            slots.try_complete(),
            Some(TextSummary { words: 7, chars: 16 })
        );
    }

    /// Проверяет отклонение устаревшего запуска и вытеснение
    /// недособранного состояния более новым.
    #[test]
    fn test_slots_run_transitions() {
        let mut slots = Slots::default();
        assert!(slots.accept(2, Slot::Words, 3));

        // запуск 1 устарел
        assert!(!slots.accept(1, Slot::Chars, 9));
        assert_eq!(slots.chars, None);

        // запуск 3 вытесняет слова запуска 2
        assert!(slots.accept(3, Slot::Chars, 4));
        assert_eq!(slots.words, None);
        assert_eq!(slots.try_complete(), None);

        assert!(slots.accept(3, Slot::Words, 2));
        assert_eq!(
            slots.try_complete(),
            Some(TextSummary { words: 2, chars: 4 })
        );
    }

    /// Проверяет ограничение полноты: сводка не публикуется,
    /// пока не пришли оба частичных результата, и публикуется ровно один раз.
    #[test]
    fn test_completeness_gating() {
        let broker = Arc::new(Broker::new());
        let aggregator = Aggregator::attach(&broker).unwrap();
        let seen = summary_probe(&broker);

        broker.publish(Notification::count(TOPIC_WORDS, 1, 3));
        assert!(seen.lock().is_empty(), "нет сводки по одному слоту");

        broker.publish(Notification::count(TOPIC_CHARS, 1, 16));
        let events = seen.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].run, 1);
        assert_eq!(
            events[0].payload.as_summary(),
            Some(TextSummary { words: 3, chars: 16 })
        );

        // после публикации слоты пусты
        assert_eq!(aggregator.slot_state(), (None, None));
    }

    /// Проверяет, что опоздавший результат устаревшего запуска
    /// не попадает в состояние следующего запуска.
    #[test]
    fn test_stale_run_rejected_via_broker() {
        let broker = Arc::new(Broker::new());
        let aggregator = Aggregator::attach(&broker).unwrap();
        let seen = summary_probe(&broker);

        broker.publish(Notification::count(TOPIC_WORDS, 2, 5));
        broker.publish(Notification::count(TOPIC_CHARS, 1, 99));

        assert!(seen.lock().is_empty());
        assert_eq!(aggregator.slot_state(), (Some(5), None));
    }

    /// Проверяет последовательные запуски: каждая пара частичных
    /// результатов даёт свою сводку, состояние не протекает между запусками.
    #[test]
    fn test_sequential_runs_do_not_leak() {
        let broker = Arc::new(Broker::new());
        Aggregator::attach(&broker).unwrap();
        let seen = summary_probe(&broker);

        broker.publish(Notification::count(TOPIC_WORDS, 1, 3));
        broker.publish(Notification::count(TOPIC_CHARS, 1, 16));
        broker.publish(Notification::count(TOPIC_WORDS, 2, 0));
        broker.publish(Notification::count(TOPIC_CHARS, 2, 0));

        let events = seen.lock();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0].payload.as_summary(),
            Some(TextSummary { words: 3, chars: 16 })
        );
        assert_eq!(
            events[1].payload.as_summary(),
            Some(TextSummary { words: 0, chars: 0 })
        );
    }
}
