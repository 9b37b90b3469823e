//! Saving and resuming a game in progress.
//!
//! A save captures the durable [`GameState`] only. The RNG and any pending
//! question are not persisted: a loaded game resumes at the top of its turn
//! with the session's configured seed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use qb_engine::GameState;

use crate::error::{SessionError, SessionResult};

/// On-disk shape of a saved game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    /// The durable game state.
    pub state: GameState,
}

/// Write `state` to `path` as pretty JSON.
pub fn save_game(path: &Path, state: &GameState) -> SessionResult<()> {
    let saved = SavedGame {
        state: state.clone(),
    };
    let payload =
        serde_json::to_string_pretty(&saved).map_err(|e| SessionError::Save(e.to_string()))?;
    fs::write(path, payload).map_err(|e| SessionError::Save(e.to_string()))
}

/// Read a saved game back from `path`.
pub fn load_game(path: &Path) -> SessionResult<GameState> {
    let text = fs::read_to_string(path).map_err(|e| SessionError::Load(e.to_string()))?;
    let saved: SavedGame =
        serde_json::from_str(&text).map_err(|e| SessionError::Load(e.to_string()))?;
    Ok(saved.state)
}
