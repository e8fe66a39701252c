//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (`ResourceError`, `SetupError`, `TurnError`) live next
//! to the code that raises them. This module provides the shared severity
//! classification and the trait every error enum implements.
//!
//! Clamping is the error policy for every probability and mitigation formula,
//! so the resolver itself has no error type.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same call may succeed later.
    ///
    /// Examples: resume requested before anything was suspended
    Recoverable,

    /// Invalid input, should not be retried without changes.
    ///
    /// Examples: negative damage amount, duplicate actor id
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    ///
    /// Examples: guarded phase transition rejected
    Internal,

    /// Encounter cannot continue.
    ///
    /// Examples: missing RNG at setup
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
