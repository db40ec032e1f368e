//! Capture detection.
//!
//! A piece landing on a shared-track square that is not safe sends every
//! opponent piece on that square back to base, whatever their color and
//! however many there are. Lane cells are private and never capture.

use smallvec::SmallVec;

use crate::board::{is_safe, Position};
use crate::core::{Color, GameState, PieceRef, PIECES_PER_PLAYER};

/// Pieces sent home by one landing.
pub type Captured = SmallVec<[PieceRef; PIECES_PER_PLAYER]>;

/// Opponent pieces that a `mover` piece landing on `landing` would capture.
#[must_use]
pub fn captures_at(state: &GameState, mover: Color, landing: Position) -> Captured {
    match landing {
        Position::Track(square) if !is_safe(square) => state
            .pieces_at(landing)
            .filter(|p| p.owner != mover)
            .map(|p| p.piece_ref())
            .collect(),
        _ => Captured::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PieceId};

    fn setup(pieces: &[(Color, u8, Position)]) -> GameState {
        let mut state = GameState::new(&GameConfig::new(1));
        for &(color, id, position) in pieces {
            state
                .place_piece(PieceRef::new(color, PieceId::new(id)), position)
                .unwrap();
        }
        state
    }

    #[test]
    fn test_captures_single_opponent() {
        let state = setup(&[(Color::Green, 0, Position::Track(15))]);

        let captured = captures_at(&state, Color::Red, Position::Track(15));
        assert_eq!(captured.as_slice(), &[PieceRef::new(Color::Green, PieceId::new(0))]);
    }

    #[test]
    fn test_captures_every_occupant() {
        let state = setup(&[
            (Color::Green, 1, Position::Track(30)),
            (Color::Green, 2, Position::Track(30)),
            (Color::Blue, 0, Position::Track(30)),
        ]);

        let captured = captures_at(&state, Color::Yellow, Position::Track(30));
        assert_eq!(captured.len(), 3);
    }

    #[test]
    fn test_never_captures_own_pieces() {
        let state = setup(&[(Color::Red, 1, Position::Track(5))]);

        assert!(captures_at(&state, Color::Red, Position::Track(5)).is_empty());
    }

    #[test]
    fn test_safe_squares_protect() {
        let state = setup(&[
            (Color::Green, 0, Position::Track(8)),
            (Color::Blue, 0, Position::Track(13)),
        ]);

        assert!(captures_at(&state, Color::Red, Position::Track(8)).is_empty());
        assert!(captures_at(&state, Color::Red, Position::Track(13)).is_empty());
    }

    #[test]
    fn test_lane_and_terminal_positions_never_capture() {
        let state = setup(&[(Color::Green, 0, Position::HomeRun(2))]);

        assert!(captures_at(&state, Color::Red, Position::HomeRun(2)).is_empty());
        assert!(captures_at(&state, Color::Red, Position::Finished).is_empty());
        assert!(captures_at(&state, Color::Red, Position::Base).is_empty());
    }
}
