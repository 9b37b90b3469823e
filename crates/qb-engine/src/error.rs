//! Error types for the turn engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a game.
///
/// All of them are recoverable at the turn boundary; the engine never
/// panics and never loses the current game state over one of these.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A board was configured with zero spaces.
    #[error("board must have at least one space")]
    EmptyBoard,

    /// A special space index falls outside the board.
    #[error("space {index} is outside a board of {size} spaces")]
    SpaceOutOfRange {
        /// The offending index.
        index: usize,
        /// The board size it was checked against.
        size: usize,
    },

    /// The game has not been started yet.
    #[error("game has not been started")]
    NotStarted,

    /// `start` was called while a game is in progress.
    #[error("a game is already in progress")]
    AlreadyStarted,

    /// A roll was attempted while a question awaits its answer.
    #[error("a question is awaiting an answer")]
    AnswerPending,

    /// A roll was attempted while a challenge awaits confirmation.
    #[error("a challenge is awaiting confirmation")]
    ChallengePending,

    /// An answer was submitted but no question is pending.
    #[error("no question is awaiting an answer")]
    NoPendingQuestion,

    /// A challenge confirmation arrived but no challenge is pending.
    #[error("no challenge is awaiting confirmation")]
    NoPendingChallenge,

    /// The game is over; only `reset` is allowed.
    #[error("the game is over; reset to play again")]
    GameOver,

    /// A question was due but the loaded bank has nothing to draw.
    #[error("no questions available for topic \"{0}\"")]
    NoQuestionsAvailable(String),

    /// An answer index outside the posed question's options.
    ///
    /// No score change is applied; the selection may be retried.
    #[error("invalid selection: option {index} of {available}")]
    InvalidSelection {
        /// The selected index.
        index: usize,
        /// How many options the question has.
        available: usize,
    },
}
