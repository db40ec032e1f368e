//! Dice: the only source of randomness in the game.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of rolls
//! - **Serializable**: O(1) state capture and restore
//! - **Pluggable**: the engine rolls through the `Dice` trait, so tests can
//!   load the dice with `ScriptedDice`
//!
//! ```
//! use rust_ludo::core::{Dice, DiceRng};
//!
//! let mut a = DiceRng::new(42);
//! let mut b = DiceRng::new(42);
//!
//! let roll = a.roll();
//! assert!((1..=6).contains(&roll));
//! assert_eq!(roll, b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// A six-sided die.
pub trait Dice {
    /// Roll once. Must return a value in `1..=6`.
    fn roll(&mut self) -> u8;
}

/// Deterministic dice backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create dice with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed these dice were created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Dice for DiceRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Serializable dice state.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Loaded dice that replay a fixed script, cycling when it runs out.
///
/// ```
/// use rust_ludo::core::{Dice, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 2]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 2);
/// assert_eq!(dice.roll(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create scripted dice. Panics if the script is empty or holds a value
    /// outside `1..=6`.
    pub fn new(script: impl IntoIterator<Item = u8>) -> Self {
        let script: Vec<u8> = script.into_iter().collect();
        assert!(!script.is_empty(), "Dice script must not be empty");
        assert!(
            script.iter().all(|v| (1..=DIE_FACES).contains(v)),
            "Dice script values must be in 1..=6"
        );

        Self { script, cursor: 0 }
    }

    /// Number of rolls made so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut dice1 = DiceRng::new(42);
        let mut dice2 = DiceRng::new(42);

        for _ in 0..100 {
            assert_eq!(dice1.roll(), dice2.roll());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut dice1 = DiceRng::new(1);
        let mut dice2 = DiceRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| dice1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| dice2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rolls_cover_every_face() {
        let mut dice = DiceRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..600 {
            let roll = dice.roll();
            assert!((1..=6).contains(&roll));
            seen[(roll - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_state_serialization() {
        let mut dice = DiceRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            dice.roll();
        }

        let state = dice.state();
        let expected: Vec<_> = (0..10).map(|_| dice.roll()).collect();

        let mut restored = DiceRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = DiceRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DiceRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_dice_cycles() {
        let mut dice = ScriptedDice::new(vec![1, 2, 3]);
        let rolls: Vec<_> = (0..7).map(|_| dice.roll()).collect();

        assert_eq!(rolls, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(dice.rolls_made(), 7);
    }

    #[test]
    #[should_panic(expected = "Dice script must not be empty")]
    fn test_scripted_dice_empty() {
        let _ = ScriptedDice::new(Vec::new());
    }

    #[test]
    #[should_panic(expected = "Dice script values must be in 1..=6")]
    fn test_scripted_dice_out_of_range() {
        let _ = ScriptedDice::new([3, 7]);
    }
}
