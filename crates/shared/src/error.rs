use thiserror::Error;

use crate::domain::{CoreKey, CoreKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MvcError {
    /// A second live instance of a registry was requested for the same key.
    #[error("{kind} singleton already constructed!")]
    SingletonViolation { kind: CoreKind, key: CoreKey },
}

impl MvcError {
    pub fn singleton_violation(kind: CoreKind, key: CoreKey) -> Self {
        Self::SingletonViolation { kind, key }
    }

    pub fn kind(&self) -> CoreKind {
        match self {
            MvcError::SingletonViolation { kind, .. } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_violation_uses_fixed_message() {
        let err = MvcError::singleton_violation(CoreKind::Facade, CoreKey::from("app"));
        assert_eq!(err.to_string(), "Facade singleton already constructed!");
        assert_eq!(err.kind(), CoreKind::Facade);

        let err = MvcError::singleton_violation(CoreKind::Controller, CoreKey::default());
        assert_eq!(err.to_string(), "Controller singleton already constructed!");
    }
}
