//! Where a piece stands.
//!
//! `Position` is the typed form of the integer position used by the
//! presentation layer. The raw encoding:
//!
//! | Position | raw |
//! |---|---|
//! | `Base` | `-1` |
//! | `Track(s)` | `s` (0..52) |
//! | `HomeRun(i)` | `52 + i` (52..58) |
//! | `Finished` | `100` |

use serde::{Deserialize, Serialize};

use super::topology::{BASE_SENTINEL, FINISHED_SENTINEL, HOME_RUN_LEN, TRACK_LEN};
use crate::core::PieceState;

/// Location of a single piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Waiting in the owner's base.
    Base,
    /// On the shared circular track.
    Track(u8),
    /// In the owner's private home-run lane.
    HomeRun(u8),
    /// Reached the final lane cell.
    Finished,
}

impl Position {
    /// Raw integer encoding.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Position::Base => BASE_SENTINEL,
            Position::Track(square) => square as i32,
            Position::HomeRun(index) => TRACK_LEN as i32 + index as i32,
            Position::Finished => FINISHED_SENTINEL,
        }
    }

    /// Decode a raw integer position. Returns `None` for unused values.
    ///
    /// ```
    /// use rust_ludo::board::Position;
    ///
    /// assert_eq!(Position::from_raw(-1), Some(Position::Base));
    /// assert_eq!(Position::from_raw(53), Some(Position::HomeRun(1)));
    /// assert_eq!(Position::from_raw(70), None);
    /// ```
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        let track = i32::from(TRACK_LEN);
        let lane_end = track + i32::from(HOME_RUN_LEN);

        match raw {
            BASE_SENTINEL => Some(Position::Base),
            FINISHED_SENTINEL => Some(Position::Finished),
            r if (0..track).contains(&r) => Some(Position::Track(r as u8)),
            r if (track..lane_end).contains(&r) => Some(Position::HomeRun((r - track) as u8)),
            _ => None,
        }
    }

    /// Piece state implied by this position.
    #[must_use]
    pub const fn state(self) -> PieceState {
        match self {
            Position::Base => PieceState::AtBase,
            Position::Track(_) | Position::HomeRun(_) => PieceState::OnTrack,
            Position::Finished => PieceState::Finished,
        }
    }

    /// Shared-track square, if the piece is on the shared track.
    #[must_use]
    pub const fn track_square(self) -> Option<u8> {
        match self {
            Position::Track(square) => Some(square),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Base => write!(f, "base"),
            Position::Track(square) => write!(f, "track {}", square),
            Position::HomeRun(index) => write!(f, "home run {}", index),
            Position::Finished => write!(f, "finished"),
        }
    }
}
