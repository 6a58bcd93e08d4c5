use std::{
    fmt,
    sync::{Arc, Weak},
};

use serde_json::Value;
use tracing::debug;

use crate::facade::Facade;

/// Handle through which mediators, proxies and commands talk to their facade.
///
/// The handle is weak so registered components never keep their own facade
/// alive. Once the facade is dropped, sends are discarded.
#[derive(Clone, Default)]
pub struct Notifier {
    facade: Weak<Facade>,
}

impl Notifier {
    pub(crate) fn new(facade: Weak<Facade>) -> Self {
        Self { facade }
    }

    /// A notifier that is not bound to any facade.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn facade(&self) -> Option<Arc<Facade>> {
        self.facade.upgrade()
    }

    pub fn is_bound(&self) -> bool {
        self.facade.strong_count() > 0
    }

    pub fn send_notification(&self, name: &str, body: Option<Value>, kind: Option<&str>) {
        match self.facade.upgrade() {
            Some(facade) => facade.send_notification(name, body, kind),
            None => debug!(notification = %name, "notifier has no live facade; dropped"),
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("bound", &self.is_bound())
            .finish()
    }
}
