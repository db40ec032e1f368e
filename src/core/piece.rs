//! Pieces and the handles that name them.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::board::Position;

/// Pieces owned by each color.
pub const PIECES_PER_PLAYER: usize = 4;

/// Piece identifier, unique within its owner's four pieces (0..3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the ids of one player's pieces.
    pub fn all() -> impl Iterator<Item = PieceId> {
        (0..PIECES_PER_PLAYER as u8).map(PieceId)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Names one piece on the board: its owner and its id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceRef {
    pub color: Color,
    pub id: PieceId,
}

impl PieceRef {
    #[must_use]
    pub const fn new(color: Color, id: PieceId) -> Self {
        Self { color, id }
    }
}

impl std::fmt::Display for PieceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.id)
    }
}

/// Coarse lifecycle of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    AtBase,
    /// On the shared track or in the home-run lane.
    OnTrack,
    Finished,
}

/// A single piece.
///
/// The state is derived from the position, so a piece can never claim to
/// be at base while standing on the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub owner: Color,
    pub position: Position,
}

impl Piece {
    /// Create a piece waiting in base.
    #[must_use]
    pub const fn at_base(owner: Color, id: PieceId) -> Self {
        Self {
            id,
            owner,
            position: Position::Base,
        }
    }

    #[must_use]
    pub const fn state(&self) -> PieceState {
        self.position.state()
    }

    /// Raw integer position for presentation.
    #[must_use]
    pub const fn raw_position(&self) -> i32 {
        self.position.raw()
    }

    #[must_use]
    pub const fn piece_ref(&self) -> PieceRef {
        PieceRef::new(self.owner, self.id)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position == Position::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_ids() {
        let ids: Vec<_> = PieceId::all().collect();
        assert_eq!(ids, vec![PieceId(0), PieceId(1), PieceId(2), PieceId(3)]);
        assert_eq!(PieceId::new(2).index(), 2);
    }

    #[test]
    fn test_new_piece_at_base() {
        let piece = Piece::at_base(Color::Green, PieceId::new(1));

        assert_eq!(piece.state(), PieceState::AtBase);
        assert_eq!(piece.raw_position(), -1);
        assert_eq!(piece.piece_ref(), PieceRef::new(Color::Green, PieceId::new(1)));
        assert!(!piece.is_finished());
    }

    #[test]
    fn test_state_follows_position() {
        let mut piece = Piece::at_base(Color::Red, PieceId::new(0));

        piece.position = Position::Track(5);
        assert_eq!(piece.state(), PieceState::OnTrack);

        piece.position = Position::HomeRun(4);
        assert_eq!(piece.state(), PieceState::OnTrack);
        assert_eq!(piece.raw_position(), 56);

        piece.position = Position::Finished;
        assert_eq!(piece.state(), PieceState::Finished);
        assert!(piece.is_finished());
    }

    #[test]
    fn test_piece_ref_display() {
        let r = PieceRef::new(Color::Blue, PieceId::new(3));
        assert_eq!(format!("{}", r), "Blue #3");
    }
}
