//! Todo workflow built on the notification framework.

pub mod commands;
pub mod list_mediator;
pub mod notes;
pub mod todo_proxy;

use std::sync::Arc;

use mvc_core::Facade;
use serde_json::json;

use crate::config::Settings;

pub use list_mediator::TodoListMediator;
pub use todo_proxy::TodoProxy;

/// Builds a facade for `settings.core_key`, maps the todo commands and runs
/// startup, which registers the proxy and the list mediator.
pub fn bootstrap(settings: &Settings) -> anyhow::Result<Arc<Facade>> {
    let facade = Facade::new(settings.core_key.as_str())?;

    facade.register_command(notes::STARTUP, |notifier| commands::StartupCommand {
        notifier,
    });
    facade.register_command(notes::ADD_TODO, |notifier| commands::AddTodoCommand {
        notifier,
    });
    facade.register_command(notes::COMPLETE_TODO, |notifier| {
        commands::CompleteTodoCommand { notifier }
    });

    facade.send_notification(notes::STARTUP, Some(json!(settings.seed_items)), None);
    Ok(facade)
}

/// Lines currently rendered by the list mediator.
pub fn rendered_lines(facade: &Facade) -> Vec<String> {
    facade
        .retrieve_mediator_as::<TodoListMediator>(TodoListMediator::NAME)
        .map(|mediator| mediator.lines())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
