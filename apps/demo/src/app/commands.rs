use std::sync::Arc;

use mvc_core::{Command, Notification, Notifier};
use serde_json::json;
use tracing::{info, warn};

use super::{notes, list_mediator::TodoListMediator, todo_proxy::TodoProxy};

fn todo_proxy(notifier: &Notifier) -> Option<Arc<TodoProxy>> {
    notifier
        .facade()?
        .retrieve_proxy_as::<TodoProxy>(TodoProxy::NAME)
}

/// Registers the store and the list view, then loads seed items from the
/// notification body.
pub struct StartupCommand {
    pub notifier: Notifier,
}

impl Command for StartupCommand {
    fn execute(&self, notification: &Notification) {
        let Some(facade) = self.notifier.facade() else {
            return;
        };
        facade.register_proxy(Arc::new(TodoProxy::new(self.notifier.clone())));
        facade.register_mediator(Arc::new(TodoListMediator::new(self.notifier.clone())));

        let seeds = notification
            .body()
            .and_then(|body| body.as_array())
            .cloned()
            .unwrap_or_default();
        for seed in seeds.iter().filter_map(|seed| seed.as_str()) {
            self.notifier
                .send_notification(notes::ADD_TODO, Some(json!(seed)), Some("seed"));
        }
        info!(key = %facade.key(), seeds = seeds.len(), "startup complete");
    }
}

pub struct AddTodoCommand {
    pub notifier: Notifier,
}

impl Command for AddTodoCommand {
    fn execute(&self, notification: &Notification) {
        let Some(proxy) = todo_proxy(&self.notifier) else {
            warn!("todo store not registered");
            return;
        };
        let text = notification
            .body()
            .and_then(|body| body.as_str())
            .unwrap_or_default();
        if let Err(err) = proxy.add(text) {
            self.notifier
                .send_notification(notes::TODO_REJECTED, Some(json!(err.to_string())), None);
        }
    }
}

pub struct CompleteTodoCommand {
    pub notifier: Notifier,
}

impl Command for CompleteTodoCommand {
    fn execute(&self, notification: &Notification) {
        let Some(proxy) = todo_proxy(&self.notifier) else {
            warn!("todo store not registered");
            return;
        };
        // Position 0 is never valid, so unusable bodies are rejected as such.
        let index = notification
            .body()
            .and_then(|body| body.as_u64())
            .and_then(|index| usize::try_from(index).ok())
            .unwrap_or(0);
        if let Err(err) = proxy.complete(index) {
            self.notifier
                .send_notification(notes::TODO_REJECTED, Some(json!(err.to_string())), None);
        }
    }
}
