//! Error types for question bank loading.

use thiserror::Error;

/// Result type for bank operations.
pub type BankResult<T> = Result<T, BankError>;

/// Errors that can occur while loading question content.
///
/// Every variant is recoverable: a caller that fails to load a bank is
/// expected to continue with an empty one and surface the failure as a
/// notice, never to abort the game.
#[derive(Debug, Error)]
pub enum BankError {
    /// The bank for a topic could not be read or parsed.
    #[error("question bank for \"{topic}\" is unavailable: {reason}")]
    Unavailable {
        /// The topic that was requested.
        topic: String,
        /// Why the bank could not be produced.
        reason: String,
    },

    /// The topic listing could not be read from the backing store.
    #[error("topic listing unavailable: {0}")]
    TopicsUnavailable(String),
}

impl BankError {
    /// Build an [`BankError::Unavailable`] from any underlying failure.
    pub fn unavailable(topic: &str, reason: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            topic: topic.to_string(),
            reason: reason.to_string(),
        }
    }
}
