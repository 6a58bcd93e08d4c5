use std::{
    collections::HashMap,
    sync::{Arc, Weak},
};

use parking_lot::RwLock;
use shared::{ContextId, CoreKey, CoreKind, MvcError, Notification};
use tracing::{debug, trace};

use crate::{command::CommandFactory, instance::InstanceGuard, observer::Observer, view::View};

/// Maps notification names to command factories.
///
/// The first mapping for a name installs one observer on the view that routes
/// back into [`Controller::execute_command`]. Remapping a name only swaps the
/// factory.
pub struct Controller {
    key: CoreKey,
    view: Arc<View>,
    command_map: RwLock<HashMap<String, CommandFactory>>,
    context: ContextId,
    this: Weak<Controller>,
    _guard: InstanceGuard,
}

impl Controller {
    pub fn new(key: impl Into<CoreKey>, view: Arc<View>) -> Result<Arc<Self>, MvcError> {
        let key = key.into();
        let guard = InstanceGuard::acquire(CoreKind::Controller, &key)?;
        Ok(Arc::new_cyclic(|this| Self {
            key,
            view,
            command_map: RwLock::new(HashMap::new()),
            context: ContextId::next(),
            this: this.clone(),
            _guard: guard,
        }))
    }

    pub fn key(&self) -> &CoreKey {
        &self.key
    }

    pub fn view(&self) -> &Arc<View> {
        &self.view
    }

    pub fn execute_command(&self, notification: &Notification) {
        let factory = self.command_map.read().get(notification.name()).cloned();
        let Some(factory) = factory else {
            trace!(notification = %notification.name(), "no command mapped");
            return;
        };

        trace!(notification = %notification.name(), "executing command");
        let command = factory();
        command.execute(notification);
    }

    pub fn register_command(&self, notification_name: &str, factory: CommandFactory) {
        let previous = self
            .command_map
            .write()
            .insert(notification_name.to_string(), factory);

        if previous.is_none() {
            let this = self.this.clone();
            let observer = Observer::new(
                move |notification: &Notification| {
                    if let Some(controller) = this.upgrade() {
                        controller.execute_command(notification);
                    }
                },
                self.context,
            );
            self.view.register_observer(notification_name, observer);
            debug!(notification = %notification_name, "command registered");
        } else {
            debug!(notification = %notification_name, "command replaced");
        }
    }

    pub fn has_command(&self, notification_name: &str) -> bool {
        self.command_map.read().contains_key(notification_name)
    }

    pub fn remove_command(&self, notification_name: &str) {
        let removed = self.command_map.write().remove(notification_name);
        if removed.is_some() {
            self.view.remove_observer(notification_name, self.context);
            debug!(notification = %notification_name, "command removed");
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
