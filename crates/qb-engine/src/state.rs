//! Game state and lifecycle phases.

use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
///
/// `NotStarted → InTurn → (AwaitingChallenge)? → (AwaitingAnswer)? → InTurn
/// → … → Won → NotStarted` (via reset). `Won` is terminal until an explicit
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game in progress.
    NotStarted,
    /// The player may roll.
    InTurn,
    /// A challenge waits for the operator to confirm or decline it.
    AwaitingChallenge,
    /// A posed question waits for an answer; the first selection wins.
    AwaitingAnswer,
    /// The target score was reached.
    Won,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::InTurn => "in turn",
            Self::AwaitingChallenge => "awaiting challenge",
            Self::AwaitingAnswer => "awaiting answer",
            Self::Won => "won",
        };
        write!(f, "{label}")
    }
}

/// The complete durable state of one game.
///
/// Owned by the engine and threaded through every operation; there are no
/// module-level globals. Serializable so a game in progress can be saved
/// and resumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Current space index, always in `[0, board size)`.
    pub position: usize,
    /// Current score; never negative.
    pub score: u32,
    /// Score needed to win.
    pub target_score: u32,
    /// The topic this game is played on.
    pub topic: String,
}

impl GameState {
    /// Fresh state for a game that has not begun.
    pub fn new(topic: impl Into<String>, target_score: u32) -> Self {
        Self {
            phase: Phase::NotStarted,
            position: 0,
            score: 0,
            target_score,
            topic: topic.into(),
        }
    }
}
