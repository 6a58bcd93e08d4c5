//! Leaf types shared by the framework core and applications built on it.

pub mod domain;
pub mod error;
pub mod notification;

pub use domain::{ContextId, CoreKey, CoreKind};
pub use error::MvcError;
pub use notification::Notification;
