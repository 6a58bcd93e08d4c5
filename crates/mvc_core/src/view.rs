use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use shared::{ContextId, CoreKey, CoreKind, MvcError, Notification};
use tracing::{debug, trace};

use crate::{
    instance::InstanceGuard,
    mediator::Mediator,
    observer::{NotificationHandler, Observer},
};

struct MediatorHandler(Arc<dyn Mediator>);

impl NotificationHandler for MediatorHandler {
    fn handle(&self, notification: &Notification) {
        self.0.handle_notification(notification);
    }
}

struct MediatorEntry {
    mediator: Arc<dyn Mediator>,
    context: ContextId,
    interests: Vec<String>,
}

/// Observer map and mediator registry.
///
/// Locks are released before any observer or lifecycle hook runs, so handlers
/// may register, remove or notify re-entrantly.
pub struct View {
    key: CoreKey,
    observer_map: RwLock<HashMap<String, Vec<Observer>>>,
    mediator_map: RwLock<HashMap<String, MediatorEntry>>,
    _guard: InstanceGuard,
}

impl View {
    pub fn new(key: impl Into<CoreKey>) -> Result<Self, MvcError> {
        let key = key.into();
        let guard = InstanceGuard::acquire(CoreKind::View, &key)?;
        Ok(Self {
            key,
            observer_map: RwLock::new(HashMap::new()),
            mediator_map: RwLock::new(HashMap::new()),
            _guard: guard,
        })
    }

    pub fn key(&self) -> &CoreKey {
        &self.key
    }

    pub fn register_observer(&self, notification_name: &str, observer: Observer) {
        trace!(
            notification = %notification_name,
            context = %observer.context(),
            "registering observer"
        );
        self.observer_map
            .write()
            .entry(notification_name.to_string())
            .or_default()
            .push(observer);
    }

    pub fn remove_observer(&self, notification_name: &str, context: ContextId) {
        let removed = {
            let mut observer_map = self.observer_map.write();
            let Some(observers) = observer_map.get_mut(notification_name) else {
                trace!(notification = %notification_name, "no observers to remove");
                return;
            };

            let removed = observers
                .iter()
                .rposition(|observer| observer.compare_notify_context(context))
                .map(|index| observers.remove(index));

            if observers.is_empty() {
                observer_map.remove(notification_name);
            }
            removed
        };

        // Handler drops may re-enter the view, so they happen unlocked.
        drop(removed);
    }

    pub fn observer_count(&self, notification_name: &str) -> usize {
        self.observer_map
            .read()
            .get(notification_name)
            .map_or(0, Vec::len)
    }

    pub fn notify_observers(&self, notification: &Notification) {
        let observers = self.observer_map.read().get(notification.name()).cloned();
        let Some(observers) = observers else {
            trace!(notification = %notification.name(), "no observers");
            return;
        };

        trace!(
            notification = %notification.name(),
            observers = observers.len(),
            "dispatching notification"
        );
        for observer in &observers {
            observer.notify_observer(notification);
        }
    }

    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        let name = mediator.mediator_name().to_string();
        let context = ContextId::next();
        let interests = mediator.list_notification_interests();

        {
            let mut mediator_map = self.mediator_map.write();
            if mediator_map.contains_key(&name) {
                debug!(mediator = %name, "mediator already registered; ignoring");
                return;
            }
            mediator_map.insert(
                name.clone(),
                MediatorEntry {
                    mediator: Arc::clone(&mediator),
                    context,
                    interests: interests.clone(),
                },
            );
        }

        if !interests.is_empty() {
            let observer = Observer::new(MediatorHandler(Arc::clone(&mediator)), context);
            for interest in &interests {
                self.register_observer(interest, observer.clone());
            }
        }

        debug!(mediator = %name, interests = interests.len(), "mediator registered");
        mediator.on_register();
    }

    pub fn retrieve_mediator(&self, mediator_name: &str) -> Option<Arc<dyn Mediator>> {
        self.mediator_map
            .read()
            .get(mediator_name)
            .map(|entry| Arc::clone(&entry.mediator))
    }

    pub fn retrieve_mediator_as<M: Mediator>(&self, mediator_name: &str) -> Option<Arc<M>> {
        self.retrieve_mediator(mediator_name)?
            .into_any_arc()
            .downcast::<M>()
            .ok()
    }

    pub fn remove_mediator(&self, mediator_name: &str) -> Option<Arc<dyn Mediator>> {
        let entry = self.mediator_map.write().remove(mediator_name);
        let Some(entry) = entry else {
            trace!(mediator = %mediator_name, "no mediator to remove");
            return None;
        };

        for interest in entry.interests.iter().rev() {
            self.remove_observer(interest, entry.context);
        }

        debug!(mediator = %mediator_name, "mediator removed");
        entry.mediator.on_remove();
        Some(entry.mediator)
    }

    pub fn has_mediator(&self, mediator_name: &str) -> bool {
        self.mediator_map.read().contains_key(mediator_name)
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
