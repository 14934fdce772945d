//! Стадии конвейера анализа текста.
//!
//! Каждая стадия знает только брокер и имена тем; ни одна стадия
//! не вызывает следующую напрямую:
//!
//! - `source`: чтение входного файла и публикация сырого текста.
//! - `sanitizer`: нормализация пунктуации и пробелов.
//! - `counters`: счётчики слов и символов (fan-out от одной темы).
//! - `aggregator`: сбор частичных результатов и публикация сводки.

pub mod aggregator;
pub mod counters;
pub mod sanitizer;
pub mod source;

pub use aggregator::*;
pub use counters::*;
pub use sanitizer::*;
pub use source::*;

/// Сырой текст, прочитанный источником.
pub const TOPIC_RAW: &str = "text.raw";
/// Очищенный текст после нормализации.
pub const TOPIC_CLEAN: &str = "text.clean";
/// Результат счётчика слов.
pub const TOPIC_WORDS: &str = "count.words";
/// Результат счётчика символов.
pub const TOPIC_CHARS: &str = "count.chars";
/// Итоговая сводка агрегатора.
pub const TOPIC_SUMMARY: &str = "text.summary";
