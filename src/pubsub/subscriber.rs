use super::Notification;

/// Подписчик на уведомления брокера.
///
/// Обработчик вызывается синхронно, на стеке публикующей стороны,
/// поэтому не должен блокироваться и не должен менять реестр подписок
/// во время доставки.
pub trait Subscriber: Send + Sync {
    /// Имя подписчика для логов и диагностики.
    fn name(&self) -> &str;

    /// Обработка одного уведомления.
    fn on_notification(&self, event: &Notification);
}

/// Адаптер, превращающий замыкание в [`Subscriber`].
///
/// Удобен для тестовых зондов и концевых подписчиков
/// (например, захват итоговой сводки).
pub struct FnSubscriber<F> {
    name: &'static str,
    handler: F,
}

impl<F> FnSubscriber<F>
where
    F: Fn(&Notification) + Send + Sync,
{
    pub fn new(name: &'static str, handler: F) -> Self {
        Self { name, handler }
    }
}

impl<F> Subscriber for FnSubscriber<F>
where
    F: Fn(&Notification) + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn on_notification(&self, event: &Notification) {
        (self.handler)(event)
    }
}
