use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::{TOPIC_CLEAN, TOPIC_RAW};
use crate::{
    error::WiringError,
    pubsub::{Broker, Notification, Subscriber},
};

/// Всё, что не буква/цифра/пробельный символ.
static PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid literal regex"));
/// Последовательности пробельных символов.
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid literal regex"));

/// Чистая функция нормализации текста.
///
/// Удаляет пунктуацию, схлопывает пробельные последовательности в один
/// пробел и обрезает края. Детерминирована: одинаковый вход — одинаковый
/// выход; пустой или пробельный вход даёт пустую строку.
pub fn sanitize(input: &str) -> String {
    let stripped = PUNCT_RE.replace_all(input, "");
    let collapsed = WS_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Трансформер: подписан на сырой текст, публикует очищенный.
pub struct Sanitizer {
    broker: Arc<Broker>,
}

impl Sanitizer {
    /// Создаёт стадию и сразу подписывает её на тему сырого текста.
    pub fn attach(broker: &Arc<Broker>) -> Result<Arc<Self>, WiringError> {
        let stage = Arc::new(Self {
            broker: Arc::clone(broker),
        });
        broker.subscribe(TOPIC_RAW, stage.clone())?;
        Ok(stage)
    }
}

impl Subscriber for Sanitizer {
    fn name(&self) -> &str {
        "sanitizer"
    }

    fn on_notification(&self, event: &Notification) {
        // Payload неожиданного типа замещается пустой строкой, а не ошибкой.
        let raw = match event.payload.as_text() {
            Some(text) => text.as_ref(),
            None => {
                warn!(topic = %event.topic, run = event.run, "non-text payload, substituting empty");
                ""
            }
        };
        let clean = sanitize(raw);
        debug!(run = event.run, chars = clean.len(), "text sanitized");
        self.broker
            .publish(Notification::text(TOPIC_CLEAN, event.run, Arc::from(clean)));
    }
}
