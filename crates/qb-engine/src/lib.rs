//! Turn engine for Questboard.
//!
//! Provides the board (wraparound movement, special-space effects), dice,
//! the game state machine, question drawing and answer scoring, and the
//! [`TurnEngine`] that ties them together. Rendering, pacing, and content
//! authoring live elsewhere; the engine is synchronous and deterministic
//! for a given seed.

pub mod board;
pub mod config;
pub mod dice;
pub mod error;
pub mod event;
pub mod question;
pub mod state;
pub mod turn;

pub use board::{Board, SpaceEffect};
pub use config::GameConfig;
pub use dice::Die;
pub use error::{EngineError, EngineResult};
pub use event::TurnEvent;
pub use question::{CORRECT_POINTS, DrawnQuestion, INCORRECT_POINTS, draw_question, score_answer};
pub use state::{GameState, Phase};
pub use turn::{CHALLENGE_POINTS, TurnEngine};
