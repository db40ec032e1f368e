//! Action representation and history records.
//!
//! Three things can happen at the table:
//! - a roll lands (`Roll`)
//! - a piece moves (`Move`)
//! - a forfeited roll passes the turn (`Pass`)
//!
//! Each committed action is appended to the state's history as an
//! `ActionRecord`, which is enough to audit or replay a game.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::piece::PieceId;

/// A committed game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The dice landed on `value`.
    Roll { value: u8 },
    /// The current player moved one of their pieces.
    Move { piece: PieceId },
    /// The roll had no legal move and the turn passed.
    Pass,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The color that took this action.
    pub color: Color,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(color: Color, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            color,
            action,
            turn,
            sequence,
        }
    }
}
