//! Model-View-Controller notification framework.
//!
//! A [`Facade`] owns one [`Model`] (proxies), one [`View`] (mediators and the
//! observer map) and one [`Controller`] (notification-to-command mappings).
//! Anything holding a [`Notifier`] can send a [`Notification`], which the view
//! fans out synchronously to every observer registered for its name.

pub mod command;
pub mod controller;
mod downcast;
pub mod facade;
pub mod instance;
pub mod mediator;
pub mod model;
pub mod notifier;
pub mod observer;
pub mod proxy;
pub mod view;

pub use command::{command_factory, Command, CommandFactory};
pub use controller::Controller;
pub use downcast::AsAnyArc;
pub use facade::Facade;
pub use mediator::{BasicMediator, Mediator, DEFAULT_MEDIATOR_NAME};
pub use model::Model;
pub use notifier::Notifier;
pub use observer::{NotificationHandler, Observer};
pub use proxy::{BasicProxy, Proxy, DEFAULT_PROXY_NAME};
pub use view::View;

pub use shared::{ContextId, CoreKey, CoreKind, MvcError, Notification};
