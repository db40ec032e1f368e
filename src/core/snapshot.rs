//! Resumable game snapshots.
//!
//! A `GameState` alone does not say what the dice will roll next. A
//! `GameSnapshot` pairs it with the dice position so a seeded game resumed
//! from bytes keeps rolling the same sequence.

use serde::{Deserialize, Serialize};

use super::rng::{DiceRng, DiceRngState};
use super::state::GameState;

/// Game state plus the dice position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: GameState,
    pub dice: DiceRngState,
}

impl GameSnapshot {
    #[must_use]
    pub fn new(state: GameState, dice: &DiceRng) -> Self {
        Self {
            state,
            dice: dice.state(),
        }
    }

    /// Dice positioned where the snapshot was taken.
    #[must_use]
    pub fn restore_dice(&self) -> DiceRng {
        DiceRng::from_state(&self.dice)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
