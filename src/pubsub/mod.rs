//! Подсистема Publish–Subscribe (pub/sub).
//!
//! Этот модуль реализует синхронную систему pub/sub для внутрипроцессного
//! вещания уведомлений между стадиями конвейера:
//!
//! - `broker`: реестр подписок по темам и синхронная доставка уведомлений.
//! - `intern` (приватный): пул `Arc<str>` для имён тем.
//! - `notification`: структура уведомления, типизированный payload и итоговая
//!   сводка.
//! - `subscriber`: трейт подписчика и адаптер для замыканий.
//!
//! Публичный API переэкспортирует:
//! - `broker::*`
//! - `notification::*`
//! - `subscriber::*`

pub mod broker;
mod intern;
pub mod notification;
pub mod subscriber;

// Публичный экспорт всех типов из вложенных модулей,
// чтобы упростить доступ к ним из внешнего кода.
pub use broker::*;
pub(crate) use intern::intern_topic;
pub use notification::*;
pub use subscriber::*;
