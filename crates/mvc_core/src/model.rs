use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use shared::{CoreKey, CoreKind, MvcError};
use tracing::{debug, trace};

use crate::{instance::InstanceGuard, proxy::Proxy};

/// Proxy registry.
pub struct Model {
    key: CoreKey,
    proxy_map: RwLock<HashMap<String, Arc<dyn Proxy>>>,
    _guard: InstanceGuard,
}

impl Model {
    pub fn new(key: impl Into<CoreKey>) -> Result<Self, MvcError> {
        let key = key.into();
        let guard = InstanceGuard::acquire(CoreKind::Model, &key)?;
        Ok(Self {
            key,
            proxy_map: RwLock::new(HashMap::new()),
            _guard: guard,
        })
    }

    pub fn key(&self) -> &CoreKey {
        &self.key
    }

    /// Stores `proxy` under its name, replacing any proxy already there.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        let name = proxy.proxy_name().to_string();
        let previous = self
            .proxy_map
            .write()
            .insert(name.clone(), Arc::clone(&proxy));
        debug!(proxy = %name, replaced = previous.is_some(), "proxy registered");
        // The replaced proxy may run user code on drop; the lock is gone by now.
        drop(previous);
        proxy.on_register();
    }

    pub fn retrieve_proxy(&self, proxy_name: &str) -> Option<Arc<dyn Proxy>> {
        self.proxy_map.read().get(proxy_name).cloned()
    }

    pub fn retrieve_proxy_as<P: Proxy>(&self, proxy_name: &str) -> Option<Arc<P>> {
        self.retrieve_proxy(proxy_name)?
            .into_any_arc()
            .downcast::<P>()
            .ok()
    }

    pub fn has_proxy(&self, proxy_name: &str) -> bool {
        self.proxy_map.read().contains_key(proxy_name)
    }

    pub fn remove_proxy(&self, proxy_name: &str) -> Option<Arc<dyn Proxy>> {
        let proxy = self.proxy_map.write().remove(proxy_name);
        let Some(proxy) = proxy else {
            trace!(proxy = %proxy_name, "no proxy to remove");
            return None;
        };
        debug!(proxy = %proxy_name, "proxy removed");
        proxy.on_remove();
        Some(proxy)
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
