use mvc_core::{Notifier, Proxy};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::notes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("todo text must not be empty")]
    EmptyText,
    #[error("no todo at position {index} (list has {len})")]
    NoSuchItem { index: usize, len: usize },
}

pub struct TodoProxy {
    notifier: Notifier,
    items: RwLock<Vec<TodoItem>>,
}

impl TodoProxy {
    pub const NAME: &'static str = "TodoProxy";

    pub fn new(notifier: Notifier) -> Self {
        Self {
            notifier,
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.items.read().clone()
    }

    pub fn add(&self, text: &str) -> Result<TodoItem, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        let item = TodoItem {
            text: text.to_string(),
            done: false,
        };
        self.items.write().push(item.clone());
        self.publish();
        Ok(item)
    }

    /// Marks the item at the 1-based `index` as done.
    pub fn complete(&self, index: usize) -> Result<TodoItem, TodoError> {
        let item = {
            let mut items = self.items.write();
            let len = items.len();
            if index == 0 || index > len {
                return Err(TodoError::NoSuchItem { index, len });
            }
            let slot = &mut items[index - 1];
            slot.done = true;
            slot.clone()
        };
        self.publish();
        Ok(item)
    }

    fn publish(&self) {
        let items = self.items();
        match serde_json::to_value(&items) {
            Ok(body) => self
                .notifier
                .send_notification(notes::TODOS_CHANGED, Some(body), None),
            Err(err) => warn!("failed to encode todo list: {err}"),
        }
    }
}

impl Proxy for TodoProxy {
    fn proxy_name(&self) -> &str {
        Self::NAME
    }

    fn on_register(&self) {
        info!(proxy = Self::NAME, "todo store ready");
    }
}
