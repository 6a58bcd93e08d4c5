use std::{
    fmt,
    sync::{Arc, Weak},
};

use serde_json::Value;
use shared::{CoreKey, CoreKind, MvcError, Notification};
use tracing::debug;

use crate::{
    command::{command_factory, Command},
    controller::Controller,
    instance::InstanceGuard,
    mediator::Mediator,
    model::Model,
    notifier::Notifier,
    proxy::Proxy,
    view::View,
};

/// Single entry point over one core's model, view and controller.
pub struct Facade {
    key: CoreKey,
    model: Arc<Model>,
    view: Arc<View>,
    controller: Arc<Controller>,
    this: Weak<Facade>,
    _guard: InstanceGuard,
}

impl Facade {
    /// Builds the facade and its three registries for `key`.
    ///
    /// Fails if any of them is already alive for the same key.
    pub fn new(key: impl Into<CoreKey>) -> Result<Arc<Self>, MvcError> {
        let key = key.into();
        let guard = InstanceGuard::acquire(CoreKind::Facade, &key)?;
        let model = Arc::new(Model::new(key.clone())?);
        let view = Arc::new(View::new(key.clone())?);
        let controller = Controller::new(key.clone(), Arc::clone(&view))?;
        debug!(key = %key, "facade initialized");

        Ok(Arc::new_cyclic(|this| Self {
            key,
            model,
            view,
            controller,
            this: this.clone(),
            _guard: guard,
        }))
    }

    pub fn default_core() -> Result<Arc<Self>, MvcError> {
        Self::new(CoreKey::default())
    }

    pub fn key(&self) -> &CoreKey {
        &self.key
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    pub fn view(&self) -> &Arc<View> {
        &self.view
    }

    pub fn controller(&self) -> &Arc<Controller> {
        &self.controller
    }

    pub fn notifier(&self) -> Notifier {
        Notifier::new(self.this.clone())
    }

    /// Maps `notification_name` to a command type built by `build`.
    ///
    /// `build` runs once per matching notification and receives a notifier
    /// bound to this facade.
    pub fn register_command<C, F>(&self, notification_name: &str, build: F)
    where
        C: Command + 'static,
        F: Fn(Notifier) -> C + Send + Sync + 'static,
    {
        let notifier = self.notifier();
        self.controller.register_command(
            notification_name,
            command_factory(move || build(notifier.clone())),
        );
    }

    pub fn remove_command(&self, notification_name: &str) {
        self.controller.remove_command(notification_name);
    }

    pub fn has_command(&self, notification_name: &str) -> bool {
        self.controller.has_command(notification_name)
    }

    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        self.model.register_proxy(proxy);
    }

    pub fn retrieve_proxy(&self, proxy_name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.retrieve_proxy(proxy_name)
    }

    pub fn retrieve_proxy_as<P: Proxy>(&self, proxy_name: &str) -> Option<Arc<P>> {
        self.model.retrieve_proxy_as(proxy_name)
    }

    pub fn remove_proxy(&self, proxy_name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.remove_proxy(proxy_name)
    }

    pub fn has_proxy(&self, proxy_name: &str) -> bool {
        self.model.has_proxy(proxy_name)
    }

    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        self.view.register_mediator(mediator);
    }

    pub fn retrieve_mediator(&self, mediator_name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.retrieve_mediator(mediator_name)
    }

    pub fn retrieve_mediator_as<M: Mediator>(&self, mediator_name: &str) -> Option<Arc<M>> {
        self.view.retrieve_mediator_as(mediator_name)
    }

    pub fn remove_mediator(&self, mediator_name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.remove_mediator(mediator_name)
    }

    pub fn has_mediator(&self, mediator_name: &str) -> bool {
        self.view.has_mediator(mediator_name)
    }

    pub fn notify_observers(&self, notification: &Notification) {
        self.view.notify_observers(notification);
    }

    pub fn send_notification(&self, name: &str, body: Option<Value>, kind: Option<&str>) {
        self.notify_observers(&Notification::from_parts(name, body, kind));
    }
}

impl fmt::Debug for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facade")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/facade_tests.rs"]
mod tests;
