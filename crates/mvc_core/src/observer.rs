use std::{fmt, sync::Arc};

use shared::{ContextId, Notification};

/// Receives notifications dispatched through the [`View`](crate::View).
pub trait NotificationHandler: Send + Sync {
    fn handle(&self, notification: &Notification);
}

impl<F> NotificationHandler for F
where
    F: Fn(&Notification) + Send + Sync,
{
    fn handle(&self, notification: &Notification) {
        self(notification)
    }
}

/// A handler paired with the identity of the object it acts for.
///
/// The context is what `View::remove_observer` matches on, so one owner can
/// unregister its observer without holding on to the handler itself.
#[derive(Clone)]
pub struct Observer {
    handler: Arc<dyn NotificationHandler>,
    context: ContextId,
}

impl Observer {
    pub fn new(handler: impl NotificationHandler + 'static, context: ContextId) -> Self {
        Self {
            handler: Arc::new(handler),
            context,
        }
    }

    pub fn from_shared(handler: Arc<dyn NotificationHandler>, context: ContextId) -> Self {
        Self { handler, context }
    }

    pub fn set_handler(&mut self, handler: Arc<dyn NotificationHandler>) {
        self.handler = handler;
    }

    pub fn set_context(&mut self, context: ContextId) {
        self.context = context;
    }

    pub fn context(&self) -> ContextId {
        self.context
    }

    pub fn notify_observer(&self, notification: &Notification) {
        self.handler.handle(notification);
    }

    pub fn compare_notify_context(&self, context: ContextId) -> bool {
        self.context == context
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/observer_tests.rs"]
mod tests;
