use std::{fmt, sync::Arc};

use serde::Serialize;

use super::intern_topic;

/// Идентификатор запуска конвейера.
///
/// Каждый вызов источника получает новый, монотонно растущий номер.
/// Уведомление несёт номер своего запуска, что позволяет агрегатору
/// отличать опоздавшие частичные результаты от актуальных.
pub type RunId = u64;

/// Итоговая сводка одного запуска: число слов и число символов.
///
/// Порядок полей фиксирован: сначала слова, затем символы —
/// и в структуре, и в текстовом представлении.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextSummary {
    pub words: usize,
    pub chars: usize,
}

impl fmt::Display for TextSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "words: {}, chars: {}", self.words, self.chars)
    }
}

/// Типизированное содержимое уведомления.
///
/// Текст хранится как `Arc<str>`: все подписчики одной публикации
/// видят одну и ту же аллокацию, а не независимые копии.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Сырой или очищенный текст.
    Text(Arc<str>),
    /// Скалярный результат одного счётчика.
    Count(usize),
    /// Скомбинированная сводка агрегатора.
    Summary(TextSummary),
}

impl Payload {
    /// Текстовое содержимое, если payload текстовый.
    pub fn as_text(&self) -> Option<&Arc<str>> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Числовое содержимое, если payload — счётчик.
    pub fn as_count(&self) -> Option<usize> {
        match self {
            Payload::Count(value) => Some(*value),
            _ => None,
        }
    }

    /// Сводка, если payload — итог агрегатора.
    pub fn as_summary(&self) -> Option<TextSummary> {
        match self {
            Payload::Summary(summary) => Some(*summary),
            _ => None,
        }
    }
}

/// Неизменяемое уведомление: тема, номер запуска и payload.
///
/// Идентичность уведомления определяется только темой и содержимым;
/// порядковых номеров внутри запуска нет.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Имя темы (interned, одна аллокация на имя).
    pub topic: Arc<str>,
    /// Запуск, к которому относится уведомление.
    pub run: RunId,
    /// Содержимое.
    pub payload: Payload,
}

impl Notification {
    pub fn new(topic: &str, run: RunId, payload: Payload) -> Self {
        Self {
            topic: intern_topic(topic),
            run,
            payload,
        }
    }

    /// Текстовое уведомление.
    pub fn text(topic: &str, run: RunId, text: Arc<str>) -> Self {
        Self::new(topic, run, Payload::Text(text))
    }

    /// Уведомление со значением счётчика.
    pub fn count(topic: &str, run: RunId, value: usize) -> Self {
        Self::new(topic, run, Payload::Count(value))
    }

    /// Уведомление с итоговой сводкой.
    pub fn summary(topic: &str, run: RunId, summary: TextSummary) -> Self {
        Self::new(topic, run, Payload::Summary(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет создание текстового уведомления и доступ к payload.
    #[test]
    fn test_text_notification() {
        let text: Arc<str> = Arc::from("hello");
        let n = Notification::text("text.raw", 1, text.clone());

        assert_eq!(&*n.topic, "text.raw");
        assert_eq!(n.run, 1);
        assert!(Arc::ptr_eq(n.payload.as_text().unwrap(), &text));
        assert!(n.payload.as_count().is_none());
        assert!(n.payload.as_summary().is_none());
    }

    /// Тест проверяет уведомление со счётчиком.
    #[test]
    fn test_count_notification() {
        let n = Notification::count("count.words", 7, 42);

        assert_eq!(&*n.topic, "count.words");
        assert_eq!(n.payload.as_count(), Some(42));
        assert!(n.payload.as_text().is_none());
    }

    /// Тест проверяет уведомление со сводкой.
    #[test]
    fn test_summary_notification() {
        let summary = TextSummary { words: 3, chars: 16 };
        let n = Notification::summary("text.summary", 2, summary);

        assert_eq!(n.payload.as_summary(), Some(summary));
    }

    /// Тест проверяет фиксированный порядок полей в текстовом представлении:
    /// сначала слова, затем символы.
    #[test]
    fn test_summary_display_order() {
        let summary = TextSummary { words: 3, chars: 16 };
        assert_eq!(summary.to_string(), "words: 3, chars: 16");
    }

    /// Тест проверяет, что клон уведомления разделяет текстовую аллокацию.
    #[test]
    fn test_clone_shares_text_allocation() {
        let n = Notification::text("text.clean", 1, Arc::from("shared"));
        let cloned = n.clone();

        assert!(Arc::ptr_eq(
            n.payload.as_text().unwrap(),
            cloned.payload.as_text().unwrap()
        ));
    }
}
