//! Events emitted by the turn engine.

use serde::{Deserialize, Serialize};

/// An observable outcome of an engine operation.
///
/// The engine resolves a turn synchronously and returns the events in the
/// order they occurred; the caller renders them however it likes. Pacing
/// (dice animations, modal delays) is a presentation concern and does not
/// appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The die came up with this value.
    Rolled(u32),
    /// The player moved along the board.
    Moved {
        /// Space the move started from.
        from: usize,
        /// Space landed on.
        to: usize,
    },
    /// The score changed.
    Score {
        /// Signed change that was applied (before clamping).
        delta: i32,
        /// Score after the change.
        total: u32,
    },
    /// Flavor or informational text.
    Notice(String),
    /// A challenge waits for confirmation.
    ChallengeOffered(String),
    /// A question was posed from this category.
    QuestionPosed {
        /// Name of the drawn category.
        category: String,
    },
    /// A question was due but the bank had nothing to draw.
    NoQuestions,
    /// The target score was reached.
    Won,
}
