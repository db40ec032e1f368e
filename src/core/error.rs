//! Why an action was refused.
//!
//! Every rejection is local and recoverable: the state is left untouched
//! and the caller may simply ignore the error.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::piece::PieceId;

/// An action that the rules do not allow in the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Illegal {
    /// A piece in base can only leave on a six.
    #[error("a piece can only leave base on a six")]
    NotSix,

    /// The roll would carry the piece past the final home-run cell.
    #[error("roll of {roll} overshoots the home run ({remaining} squares left)")]
    Overshoot { remaining: u8, roll: u8 },

    #[error("piece has already finished")]
    AlreadyFinished,

    #[error("not your turn: it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Color, got: Color },

    #[error("no dice roll is pending")]
    NoPendingRoll,

    #[error("dice are already rolling")]
    RollInProgress,

    /// A roll was requested while a previous roll still awaits its move.
    #[error("current roll has not been used yet")]
    NotAwaitingRoll,

    #[error("game is over: {winner} has won")]
    GameOver { winner: Color },

    #[error("dice are not rolling")]
    NotRolling,

    #[error("no forfeited roll is waiting to pass the turn")]
    NotPassing,

    #[error("no piece with id {id}")]
    UnknownPiece { id: PieceId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Illegal::Overshoot {
            remaining: 3,
            roll: 5,
        };
        assert_eq!(
            err.to_string(),
            "roll of 5 overshoots the home run (3 squares left)"
        );

        let err = Illegal::NotYourTurn {
            expected: Color::Red,
            got: Color::Blue,
        };
        assert_eq!(err.to_string(), "not your turn: it is Red's turn, not Blue's");

        let err = Illegal::UnknownPiece { id: PieceId::new(7) };
        assert_eq!(err.to_string(), "no piece with id #7");
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Illegal>();
    }
}
