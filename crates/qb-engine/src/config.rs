//! Configuration for a new game.

use crate::dice::Die;

/// Knobs for one game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible games.
    pub seed: u64,
    /// Score needed to win.
    pub target_score: u32,
    /// Die rolled each turn.
    pub die: Die,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            target_score: 50,
            die: Die::D6,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the target score (at least 1).
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target.max(1);
        self
    }

    /// Set the die rolled each turn.
    pub fn with_die(mut self, die: Die) -> Self {
        self.die = die;
        self
    }
}
