use mvc_core::{BasicMediator, Mediator, Notification, Notifier};
use tracing::debug;

use super::{notes, todo_proxy::TodoItem};

/// Renders the todo list into text lines, which stand in for a view
/// component.
pub struct TodoListMediator {
    base: BasicMediator<Vec<String>>,
}

impl TodoListMediator {
    pub const NAME: &'static str = "TodoListMediator";

    pub fn new(notifier: Notifier) -> Self {
        Self {
            base: BasicMediator::new(Some(Self::NAME), Some(Vec::new()), notifier),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.base.view_component().unwrap_or_default()
    }

    fn render(&self, items: &[TodoItem]) {
        let lines = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let mark = if item.done { 'x' } else { ' ' };
                format!("{:>2}. [{mark}] {}", i + 1, item.text)
            })
            .collect();
        self.base.set_view_component(Some(lines));
    }
}

impl Mediator for TodoListMediator {
    fn mediator_name(&self) -> &str {
        self.base.name()
    }

    fn list_notification_interests(&self) -> Vec<String> {
        vec![
            notes::TODOS_CHANGED.to_string(),
            notes::TODO_REJECTED.to_string(),
        ]
    }

    fn handle_notification(&self, notification: &Notification) {
        match notification.name() {
            notes::TODOS_CHANGED => {
                let items: Vec<TodoItem> = notification
                    .body()
                    .and_then(|body| serde_json::from_value(body.clone()).ok())
                    .unwrap_or_default();
                debug!(items = items.len(), "re-rendering todo list");
                self.render(&items);
            }
            notes::TODO_REJECTED => {
                let reason = notification
                    .body()
                    .and_then(|body| body.as_str())
                    .unwrap_or("unknown reason");
                self.base.with_view_component(|lines| {
                    if let Some(lines) = lines {
                        lines.push(format!("!! {reason}"));
                    }
                });
            }
            _ => {}
        }
    }
}
