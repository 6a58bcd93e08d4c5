use std::sync::Arc;

use shared::Notification;

/// One-shot handler built fresh for every matching notification.
pub trait Command {
    fn execute(&self, notification: &Notification);
}

pub type CommandFactory = Arc<dyn Fn() -> Box<dyn Command> + Send + Sync>;

pub fn command_factory<C, F>(build: F) -> CommandFactory
where
    C: Command + 'static,
    F: Fn() -> C + Send + Sync + 'static,
{
    Arc::new(move || Box::new(build()) as Box<dyn Command>)
}
