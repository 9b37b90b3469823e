//! Error types for the play session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during an interactive session.
///
/// All of them are recoverable: the caller prints the message and keeps the
/// session alive.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input did not match any command.
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    /// A command argument was missing or malformed.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// A game could not be written to disk.
    #[error("could not save game: {0}")]
    Save(String),

    /// A game could not be read back from disk.
    #[error("could not load game: {0}")]
    Load(String),

    /// Engine error, surfaced verbatim.
    #[error("{0}")]
    Engine(#[from] qb_engine::EngineError),
}
