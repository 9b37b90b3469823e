//! Board geometry and special-space effects.
//!
//! The board is a circuit of `size` spaces indexed `0..size`. Movement
//! always wraps; there is no final space to land on exactly. Some spaces
//! carry a configured [`SpaceEffect`]; the rest resolve under the engine's
//! default-space policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The effect configured on a board space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceEffect {
    /// Award points on landing.
    Bonus(i32),
    /// Deduct points on landing; the stored value is the (negative) delta.
    Penalty(i32),
    /// Show a study fact.
    Fact(String),
    /// Offer a challenge to complete for bonus points.
    Challenge(String),
    /// Pose a question as the space's entire effect.
    Question,
}

/// A circular game board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    spaces: BTreeMap<usize, SpaceEffect>,
}

impl Board {
    /// Create an empty board of `size` spaces.
    pub fn new(size: usize) -> EngineResult<Self> {
        if size == 0 {
            return Err(EngineError::EmptyBoard);
        }
        Ok(Self {
            size,
            spaces: BTreeMap::new(),
        })
    }

    /// Configure a special space.
    pub fn with_space(mut self, index: usize, effect: SpaceEffect) -> EngineResult<Self> {
        if index >= self.size {
            return Err(EngineError::SpaceOutOfRange {
                index,
                size: self.size,
            });
        }
        self.spaces.insert(index, effect);
        Ok(self)
    }

    /// The standard 24-space study circuit.
    pub fn standard() -> Self {
        let spaces = BTreeMap::from([
            (3, SpaceEffect::Bonus(3)),
            (
                6,
                SpaceEffect::Fact("Did you know? Practice makes perfect!".to_string()),
            ),
            (
                9,
                SpaceEffect::Challenge("Name 3 protocols in 10 seconds".to_string()),
            ),
            (12, SpaceEffect::Bonus(5)),
            (15, SpaceEffect::Penalty(-3)),
            (
                18,
                SpaceEffect::Fact("Tip: Review wrong answers to learn faster".to_string()),
            ),
            (
                21,
                SpaceEffect::Challenge("Explain a concept in your own words".to_string()),
            ),
            (23, SpaceEffect::Bonus(7)),
        ]);
        Self { size: 24, spaces }
    }

    /// Number of spaces.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The effect configured at `position`, if any.
    pub fn effect_at(&self, position: usize) -> Option<&SpaceEffect> {
        self.spaces.get(&position)
    }

    /// Iterate the configured special spaces in index order.
    pub fn special_spaces(&self) -> impl Iterator<Item = (usize, &SpaceEffect)> {
        self.spaces.iter().map(|(i, e)| (*i, e))
    }

    /// The space reached from `position` after `steps` steps, wrapping.
    ///
    /// Reducing both operands first keeps the sum from overflowing for any
    /// `steps`.
    pub fn advance(&self, position: usize, steps: usize) -> usize {
        (position % self.size + steps % self.size) % self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_rejected() {
        assert!(matches!(Board::new(0), Err(EngineError::EmptyBoard)));
    }

    #[test]
    fn out_of_range_space_rejected() {
        let board = Board::new(10).unwrap();
        let err = board.with_space(10, SpaceEffect::Question).unwrap_err();
        assert!(matches!(
            err,
            EngineError::SpaceOutOfRange { index: 10, size: 10 }
        ));
    }

    #[test]
    fn advance_wraps() {
        let board = Board::standard();
        assert_eq!(board.advance(22, 5), 3);
        assert_eq!(board.advance(0, 24), 0);
        assert_eq!(board.advance(23, 1), 0);
    }

    #[test]
    fn advance_handles_large_steps() {
        let board = Board::standard();
        assert_eq!(board.advance(22, usize::MAX - 4), board.advance(22, (usize::MAX - 4) % 24));
        assert!(board.advance(5, usize::MAX) < 24);
    }

    #[test]
    fn standard_board_layout() {
        let board = Board::standard();
        assert_eq!(board.size(), 24);
        assert_eq!(board.special_spaces().count(), 8);
        assert_eq!(board.effect_at(3), Some(&SpaceEffect::Bonus(3)));
        assert_eq!(board.effect_at(15), Some(&SpaceEffect::Penalty(-3)));
        assert_eq!(board.effect_at(23), Some(&SpaceEffect::Bonus(7)));
        assert_eq!(board.effect_at(0), None);
    }
}
