use parking_lot::RwLock;
use serde_json::Value;

use crate::{downcast::AsAnyArc, notifier::Notifier};

pub const DEFAULT_PROXY_NAME: &str = "Proxy";

/// Mediates access to a piece of application data registered in the
/// [`Model`](crate::Model).
pub trait Proxy: AsAnyArc {
    fn proxy_name(&self) -> &str;

    fn on_register(&self) {}

    fn on_remove(&self) {}
}

pub struct BasicProxy {
    name: String,
    data: RwLock<Value>,
    notifier: Notifier,
}

impl BasicProxy {
    pub fn new(name: Option<&str>, data: Option<Value>, notifier: Notifier) -> Self {
        Self {
            name: name.unwrap_or(DEFAULT_PROXY_NAME).to_string(),
            data: RwLock::new(data.unwrap_or(Value::Null)),
            notifier,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> Value {
        self.data.read().clone()
    }

    pub fn set_data(&self, data: Value) {
        *self.data.write() = data;
    }

    pub fn update_data<R>(&self, f: impl FnOnce(&mut Value) -> R) -> R {
        f(&mut *self.data.write())
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn send_notification(&self, name: &str, body: Option<Value>, kind: Option<&str>) {
        self.notifier.send_notification(name, body, kind);
    }
}

impl Proxy for BasicProxy {
    fn proxy_name(&self) -> &str {
        &self.name
    }
}
