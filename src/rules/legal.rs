//! Legality filter: which pieces can use a roll.

use smallvec::SmallVec;

use super::movement::advance_piece;
use crate::core::{Color, GameState, PieceId, PieceRef, PIECES_PER_PLAYER};

/// Ids of the pieces that may legally move, ascending.
pub type LegalPieces = SmallVec<[PieceId; PIECES_PER_PLAYER]>;

/// Enumerate `color`'s pieces that `roll` can legally move.
///
/// An empty result means the roll is forfeited.
#[must_use]
pub fn legal_pieces(state: &GameState, color: Color, roll: u8) -> LegalPieces {
    state
        .player(color)
        .pieces
        .iter()
        .filter(|piece| advance_piece(piece, roll).is_ok())
        .map(|piece| piece.id)
        .collect()
}

/// Whether `roll` can legally move one specific piece.
#[must_use]
pub fn is_legal(state: &GameState, piece: PieceRef, roll: u8) -> bool {
    state
        .piece(piece)
        .is_some_and(|p| advance_piece(p, roll).is_ok())
}
