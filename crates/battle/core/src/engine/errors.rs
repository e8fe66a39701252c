//! Error types for encounter setup and turn execution.

use crate::error::{BattleError, ErrorSeverity};
use crate::state::{ActorId, ResourceError, StateError};

use super::phase::Phase;

/// Errors raised while building an encounter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("encounter requires a player actor")]
    MissingPlayer,

    #[error("encounter requires an enemy actor")]
    MissingEnemy,

    #[error("encounter requires an injected random stream")]
    MissingRng,

    #[error("actor {id} has is_player={actual}, expected {expected}")]
    PlayerFlagMismatch {
        id: ActorId,
        expected: bool,
        actual: bool,
    },

    #[error("actor {id} has no hit points (hp.max = {max})")]
    NoHitPoints { id: ActorId, max: i32 },

    #[error(transparent)]
    State(#[from] StateError),
}

impl BattleError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingRng => ErrorSeverity::Fatal,
            Self::State(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPlayer => "SETUP_MISSING_PLAYER",
            Self::MissingEnemy => "SETUP_MISSING_ENEMY",
            Self::MissingRng => "SETUP_MISSING_RNG",
            Self::PlayerFlagMismatch { .. } => "SETUP_PLAYER_FLAG_MISMATCH",
            Self::NoHitPoints { .. } => "SETUP_NO_HIT_POINTS",
            Self::State(err) => err.error_code(),
        }
    }
}

/// Errors surfaced while driving the turn state machine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("illegal phase transition {from} -> {to}")]
    IllegalTransition { from: Phase, to: Phase },

    #[error("nothing to resume in phase {phase}")]
    NothingToResume { phase: Phase },

    #[error("actor {id} is not part of this encounter")]
    MissingActor { id: ActorId },

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl BattleError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IllegalTransition { .. } | Self::MissingActor { .. } => ErrorSeverity::Internal,
            Self::NothingToResume { .. } => ErrorSeverity::Recoverable,
            Self::Resource(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IllegalTransition { .. } => "TURN_ILLEGAL_TRANSITION",
            Self::NothingToResume { .. } => "TURN_NOTHING_TO_RESUME",
            Self::MissingActor { .. } => "TURN_MISSING_ACTOR",
            Self::Resource(err) => err.error_code(),
        }
    }
}
