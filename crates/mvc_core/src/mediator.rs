use parking_lot::RwLock;
use serde_json::Value;
use shared::Notification;

use crate::{downcast::AsAnyArc, notifier::Notifier};

pub const DEFAULT_MEDIATOR_NAME: &str = "Mediator";

/// Mediates between a view component and the rest of the application.
///
/// Every hook has a no-op default; implementors override the ones they need.
pub trait Mediator: AsAnyArc {
    fn mediator_name(&self) -> &str;

    /// Notification names this mediator is interested in.
    fn list_notification_interests(&self) -> Vec<String> {
        Vec::new()
    }

    fn handle_notification(&self, _notification: &Notification) {}

    fn on_register(&self) {}

    fn on_remove(&self) {}
}

/// Named mediator holding an opaque view component.
///
/// Application mediators usually embed one of these and forward
/// `mediator_name` to it.
pub struct BasicMediator<V = Value> {
    name: String,
    view_component: RwLock<Option<V>>,
    notifier: Notifier,
}

impl<V: Send + Sync + 'static> BasicMediator<V> {
    pub fn new(name: Option<&str>, view_component: Option<V>, notifier: Notifier) -> Self {
        Self {
            name: name.unwrap_or(DEFAULT_MEDIATOR_NAME).to_string(),
            view_component: RwLock::new(view_component),
            notifier,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view_component(&self) -> Option<V>
    where
        V: Clone,
    {
        self.view_component.read().clone()
    }

    pub fn with_view_component<R>(&self, f: impl FnOnce(Option<&mut V>) -> R) -> R {
        let mut guard = self.view_component.write();
        f(guard.as_mut())
    }

    pub fn set_view_component(&self, view_component: Option<V>) {
        let previous = std::mem::replace(&mut *self.view_component.write(), view_component);
        drop(previous);
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn send_notification(&self, name: &str, body: Option<Value>, kind: Option<&str>) {
        self.notifier.send_notification(name, body, kind);
    }
}

impl<V: Send + Sync + 'static> Mediator for BasicMediator<V> {
    fn mediator_name(&self) -> &str {
        &self.name
    }
}
