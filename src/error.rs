//! Error types for the lotgrid engine
//!
//! Two failure classes cover everything the engine can reject:
//! - [`EngineError::Validation`]: caller-supplied input was rejected, no
//!   state was mutated.
//! - [`EngineError::InconsistentState`]: the lot's space registry disagrees
//!   with its dimensions; the operation is aborted so the mismatch stays
//!   visible instead of being papered over.
//!
//! Fallbacks (unparseable time string, unrecognized repeat pattern) are NOT
//! errors — they change output silently and are surfaced as
//! `tracing::warn!` events at the point they are applied.

use thiserror::Error;

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Bad input: out-of-range merge rows, non-adjacent merge rows,
    /// zero dimensions, missing reservation fields
    #[error("validation failed: {0}")]
    Validation(String),

    /// The space registry was not kept in sync with the lot dimensions
    #[error("inconsistent state: {0}")]
    InconsistentState(String),
}

impl EngineError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an inconsistent state error
    pub fn inconsistent(msg: impl Into<String>) -> Self {
        Self::InconsistentState(msg.into())
    }
}
