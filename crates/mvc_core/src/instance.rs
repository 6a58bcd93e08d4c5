//! Keyed instance bookkeeping.
//!
//! Every registry claims `(kind, key)` for as long as it is alive. Claiming a
//! pair that is already held is a programming error and is reported as
//! [`MvcError::SingletonViolation`].

use std::collections::BTreeSet;

use parking_lot::{const_mutex, Mutex};
use shared::{CoreKey, CoreKind, MvcError};
use tracing::{debug, warn};

static LIVE_INSTANCES: Mutex<BTreeSet<(CoreKind, CoreKey)>> = const_mutex(BTreeSet::new());

/// Returns whether a registry of `kind` is currently alive for `key`.
pub fn is_live(kind: CoreKind, key: &CoreKey) -> bool {
    LIVE_INSTANCES.lock().contains(&(kind, key.clone()))
}

#[derive(Debug)]
pub(crate) struct InstanceGuard {
    kind: CoreKind,
    key: CoreKey,
}

impl InstanceGuard {
    pub(crate) fn acquire(kind: CoreKind, key: &CoreKey) -> Result<Self, MvcError> {
        let mut live = LIVE_INSTANCES.lock();
        if !live.insert((kind, key.clone())) {
            warn!(kind = %kind, key = %key, "refusing to construct a second instance");
            return Err(MvcError::singleton_violation(kind, key.clone()));
        }
        debug!(kind = %kind, key = %key, "instance constructed");
        Ok(Self {
            kind,
            key: key.clone(),
        })
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        LIVE_INSTANCES
            .lock()
            .remove(&(self.kind, self.key.clone()));
        debug!(kind = %self.kind, key = %self.key, "instance released");
    }
}

#[cfg(test)]
#[path = "tests/instance_tests.rs"]
mod tests;
