//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, encounter setup and turn
//! execution so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use battle_core::{BattleError, ErrorSeverity, SetupError, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("player intent provider not set")]
    ProviderNotSet,

    #[error("intent provider channel closed")]
    IntentProviderChannelClosed,

    #[error("scripted intents exhausted")]
    IntentsExhausted,

    #[error("encounter worker command channel closed")]
    CommandChannelClosed,

    #[error("encounter worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("encounter worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl BattleError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Setup(err) => err.severity(),
            Self::Turn(err) => err.severity(),
            Self::InvalidConfig { .. } => ErrorSeverity::Validation,
            Self::IntentsExhausted => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderNotSet => "RUNTIME_PROVIDER_NOT_SET",
            Self::IntentProviderChannelClosed => "RUNTIME_PROVIDER_CLOSED",
            Self::IntentsExhausted => "RUNTIME_INTENTS_EXHAUSTED",
            Self::CommandChannelClosed => "RUNTIME_COMMAND_CLOSED",
            Self::ReplyChannelClosed(_) => "RUNTIME_REPLY_CLOSED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            Self::InvalidConfig { .. } => "RUNTIME_INVALID_CONFIG",
            Self::Setup(err) => err.error_code(),
            Self::Turn(err) => err.error_code(),
        }
    }
}
