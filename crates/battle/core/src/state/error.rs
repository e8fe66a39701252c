use crate::error::{BattleError, ErrorSeverity};
use crate::state::ActorId;

/// Errors raised by the actor registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("actor {id} is already registered")]
    DuplicateActor { id: ActorId },

    #[error("actor {id} is not registered")]
    UnknownActor { id: ActorId },
}

impl BattleError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateActor { .. } => ErrorSeverity::Validation,
            Self::UnknownActor { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateActor { .. } => "STATE_DUPLICATE_ACTOR",
            Self::UnknownActor { .. } => "STATE_UNKNOWN_ACTOR",
        }
    }
}
