use std::sync::Arc;

use tracing::debug;

use super::{TOPIC_CHARS, TOPIC_CLEAN, TOPIC_WORDS};
use crate::{
    error::WiringError,
    pubsub::{Broker, Notification, Subscriber},
};

/// Число слов: токены, разделённые пробельными символами.
/// Пустая или пробельная строка — ноль.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Число непробельных символов.
pub fn count_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Счётчик слов: подписан на очищенный текст,
/// публикует результат в свою тему.
///
/// Стадия без состояния; счётчики одной темы не знают друг о друге.
pub struct WordCountSink {
    broker: Arc<Broker>,
}

impl WordCountSink {
    pub fn attach(broker: &Arc<Broker>) -> Result<Arc<Self>, WiringError> {
        let stage = Arc::new(Self {
            broker: Arc::clone(broker),
        });
        broker.subscribe(TOPIC_CLEAN, stage.clone())?;
        Ok(stage)
    }
}

impl Subscriber for WordCountSink {
    fn name(&self) -> &str {
        "word-count"
    }

    fn on_notification(&self, event: &Notification) {
        let text = event.payload.as_text().map(|t| t.as_ref()).unwrap_or("");
        let words = count_words(text);
        debug!(run = event.run, words, "word count published");
        self.broker
            .publish(Notification::count(TOPIC_WORDS, event.run, words));
    }
}

/// Счётчик символов, устроен так же, как счётчик слов.
pub struct CharCountSink {
    broker: Arc<Broker>,
}

impl CharCountSink {
    pub fn attach(broker: &Arc<Broker>) -> Result<Arc<Self>, WiringError> {
        let stage = Arc::new(Self {
            broker: Arc::clone(broker),
        });
        broker.subscribe(TOPIC_CLEAN, stage.clone())?;
        Ok(stage)
    }
}

impl Subscriber for CharCountSink {
    fn name(&self) -> &str {
        "char-count"
    }

    fn on_notification(&self, event: &Notification) {
        let text = event.payload.as_text().map(|t| t.as_ref()).unwrap_or("");
        let chars = count_chars(text);
        debug!(run = event.run, chars, "char count published");
        self.broker
            .publish(Notification::count(TOPIC_CHARS, event.run, chars));
    }
}
