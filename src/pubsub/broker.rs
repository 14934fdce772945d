use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use dashmap::DashMap;
use tracing::trace;

use super::{intern_topic, Notification, Subscriber};
use crate::WiringError;

type TopicKey = Arc<str>;

/// Брокер уведомлений с синхронной доставкой.
///
/// Поддерживает:
/// - Подписку произвольного числа подписчиков на одну тему (fan-out)
/// - Доставку в порядке регистрации, на стеке публикующей стороны
/// - Статистику публикаций и публикаций без подписчиков
///
/// Реестр заполняется один раз на этапе связывания конвейера;
/// изменение подписок во время доставки не поддерживается.
pub struct Broker {
    /// Темы → упорядоченный список подписчиков.
    topics: DashMap<TopicKey, Vec<Arc<dyn Subscriber>>>,
    /// Общее количество вызовов `publish`.
    pub publish_count: AtomicUsize,
    /// Количество публикаций, не нашедших ни одного подписчика.
    pub dropped_count: AtomicUsize,
}

impl Broker {
    pub fn new() -> Self {
        Self {
            topics: DashMap::new(),
            publish_count: AtomicUsize::new(0),
            dropped_count: AtomicUsize::new(0),
        }
    }

    /// Подписка на тему. Подписчики одной темы получают уведомления
    /// в том порядке, в котором подписались.
    ///
    /// Пустое имя темы — дефект связывания, отклоняется сразу.
    pub fn subscribe(
        &self,
        topic: &str,
        subscriber: Arc<dyn Subscriber>,
    ) -> Result<(), WiringError> {
        if topic.is_empty() {
            return Err(WiringError::EmptyTopicName);
        }
        trace!(topic, subscriber = subscriber.name(), "subscribe");
        self.topics
            .entry(intern_topic(topic))
            .or_default()
            .push(subscriber);
        Ok(())
    }

    /// Подписка замыканием — обёртка над [`FnSubscriber`].
    ///
    /// [`FnSubscriber`]: super::FnSubscriber
    pub fn subscribe_fn<F>(
        &self,
        topic: &str,
        name: &'static str,
        handler: F,
    ) -> Result<(), WiringError>
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        self.subscribe(topic, Arc::new(super::FnSubscriber::new(name, handler)))
    }

    /// Публикация уведомления.
    ///
    /// Все подписчики темы вызываются синхронно, в порядке регистрации,
    /// до возврата из этого метода. Публикация в тему без подписчиков
    /// не создаёт тему и только увеличивает `dropped_count`.
    pub fn publish(&self, event: Notification) {
        self.publish_count.fetch_add(1, Ordering::Relaxed);

        // Список клонируется до вызова обработчиков, чтобы повторная
        // публикация изнутри обработчика не держала shard-замок реестра.
        let handlers: Option<Vec<Arc<dyn Subscriber>>> = self
            .topics
            .get(event.topic.as_ref())
            .map(|entry| entry.value().clone());

        match handlers {
            Some(handlers) if !handlers.is_empty() => {
                trace!(
                    topic = %event.topic,
                    run = event.run,
                    subscribers = handlers.len(),
                    "delivering notification"
                );
                for handler in &handlers {
                    handler.on_notification(&event);
                }
            }
            _ => {
                self.dropped_count.fetch_add(1, Ordering::Relaxed);
                trace!(topic = %event.topic, run = event.run, "no subscribers, dropped");
            }
        }
    }

    /// Число подписчиков темы.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .get(topic)
            .map(|entry| entry.value().len())
            .unwrap_or(0)
    }

    /// Удаляет все подписки на указанную тему (и саму тему).
    ///
    /// Следующая `publish` не создаст тему заново.
    pub fn unsubscribe_all(&self, topic: &str) {
        self.topics.remove(topic);
    }
}

impl Default for Broker {
    fn default() -> Self {
        Self::new()
    }
}
