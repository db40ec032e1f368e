//! Movement calculator: where a roll takes a piece.
//!
//! Pure and deterministic. The result depends only on the starting
//! position, the owner's color and the roll.
//!
//! A piece walks its color's lap one square at a time. Standing on its
//! home entrance, the next step enters lane cell 0 instead of continuing
//! around the track. Reaching the last lane cell finishes the piece; a roll
//! that would carry it further is refused outright.
//!
//! ```
//! use rust_ludo::board::Position;
//! use rust_ludo::core::{Color, Illegal};
//! use rust_ludo::rules::advance;
//!
//! // Red's entrance is square 50: two steps from 49 reach lane cell 0.
//! assert_eq!(advance(Position::Track(49), Color::Red, 2), Ok(Position::HomeRun(0)));
//!
//! // Three cells left in the lane, a five is too many.
//! assert_eq!(
//!     advance(Position::HomeRun(2), Color::Red, 5),
//!     Err(Illegal::Overshoot { remaining: 3, roll: 5 })
//! );
//! ```

use crate::board::topology::{home_entrance, start_offset, track_distance, HOME_RUN_LEN, TRACK_LEN};
use crate::board::Position;
use crate::core::{Color, Illegal, Piece};

/// Roll that lets a piece leave base.
pub const ENTRY_ROLL: u8 = 6;

/// Lane index of the final home-run cell.
const FINAL_LANE_CELL: u8 = HOME_RUN_LEN - 1;

/// Compute where `roll` takes a piece of `color` standing at `position`.
pub fn advance(position: Position, color: Color, roll: u8) -> Result<Position, Illegal> {
    debug_assert!((1..=6).contains(&roll), "roll out of range: {}", roll);

    match position {
        Position::Finished => Err(Illegal::AlreadyFinished),
        Position::Base if roll == ENTRY_ROLL => Ok(Position::Track(start_offset(color))),
        Position::Base => Err(Illegal::NotSix),
        Position::Track(_) | Position::HomeRun(_) => {
            let remaining = distance_to_finish(position, color).unwrap_or(0);
            if roll > remaining {
                return Err(Illegal::Overshoot { remaining, roll });
            }
            Ok(walk(position, color, roll))
        }
    }
}

/// Convenience form of [`advance`] using the piece's owner as the color.
pub fn advance_piece(piece: &Piece, roll: u8) -> Result<Position, Illegal> {
    advance(piece.position, piece.owner, roll)
}

/// Steps left until a piece of `color` reaches the final lane cell.
///
/// `None` for pieces in base or already finished.
#[must_use]
pub fn distance_to_finish(position: Position, color: Color) -> Option<u8> {
    match position {
        // To the entrance, then one step per lane cell.
        Position::Track(square) => Some(track_distance(square, home_entrance(color)) + HOME_RUN_LEN),
        Position::HomeRun(index) => Some(FINAL_LANE_CELL.saturating_sub(index)),
        Position::Base | Position::Finished => None,
    }
}

/// Walk `steps` squares. Caller guarantees the walk stays within the lane.
fn walk(position: Position, color: Color, steps: u8) -> Position {
    let entrance = home_entrance(color);

    let landed = (0..steps).fold(position, |pos, _| match pos {
        Position::Track(square) if square == entrance => Position::HomeRun(0),
        Position::Track(square) => Position::Track((square + 1) % TRACK_LEN),
        Position::HomeRun(index) => Position::HomeRun(index + 1),
        other => other,
    });

    match landed {
        Position::HomeRun(FINAL_LANE_CELL) => Position::Finished,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_base_on_six() {
        for color in Color::all() {
            assert_eq!(
                advance(Position::Base, color, 6),
                Ok(Position::Track(start_offset(color)))
            );
        }
    }

    #[test]
    fn test_base_needs_six() {
        for roll in 1..=5 {
            assert_eq!(advance(Position::Base, Color::Green, roll), Err(Illegal::NotSix));
        }
    }

    #[test]
    fn test_finished_piece_cannot_move() {
        for roll in 1..=6 {
            assert_eq!(
                advance(Position::Finished, Color::Blue, roll),
                Err(Illegal::AlreadyFinished)
            );
        }
    }

    #[test]
    fn test_plain_track_step() {
        assert_eq!(advance(Position::Track(3), Color::Red, 4), Ok(Position::Track(7)));
    }

    #[test]
    fn test_wraps_around_track() {
        // Green's entrance is 11, so wrapping past 51 is a normal step.
        assert_eq!(advance(Position::Track(50), Color::Green, 4), Ok(Position::Track(2)));
    }

    #[test]
    fn test_other_colors_pass_red_entrance() {
        assert_eq!(advance(Position::Track(49), Color::Blue, 3), Ok(Position::Track(0)));
    }

    #[test]
    fn test_enters_home_run() {
        // Red at its entrance: one step lands on lane cell 0.
        assert_eq!(advance(Position::Track(50), Color::Red, 1), Ok(Position::HomeRun(0)));
        // Green from 9: 9 -> 10 -> 11 (entrance) -> lane 0 -> lane 1.
        assert_eq!(advance(Position::Track(9), Color::Green, 4), Ok(Position::HomeRun(1)));
    }

    #[test]
    fn test_lane_landing_formula() {
        // Standing on the entrance with r steps left lands on lane r - 1.
        for roll in 1..=5 {
            assert_eq!(
                advance(Position::Track(24), Color::Yellow, roll),
                Ok(Position::HomeRun(roll - 1))
            );
        }
    }

    #[test]
    fn test_exact_roll_finishes() {
        assert_eq!(advance(Position::HomeRun(2), Color::Red, 3), Ok(Position::Finished));
        assert_eq!(advance(Position::Track(50), Color::Red, 6), Ok(Position::Finished));
    }

    #[test]
    fn test_overshoot_rejected() {
        assert_eq!(
            advance(Position::HomeRun(2), Color::Red, 5),
            Err(Illegal::Overshoot { remaining: 3, roll: 5 })
        );
        assert_eq!(
            advance(Position::HomeRun(4), Color::Blue, 2),
            Err(Illegal::Overshoot { remaining: 1, roll: 2 })
        );
    }

    #[test]
    fn test_distance_to_finish() {
        assert_eq!(distance_to_finish(Position::Track(0), Color::Red), Some(56));
        assert_eq!(distance_to_finish(Position::Track(50), Color::Red), Some(6));
        assert_eq!(distance_to_finish(Position::Track(13), Color::Green), Some(56));
        assert_eq!(distance_to_finish(Position::HomeRun(0), Color::Green), Some(5));
        assert_eq!(distance_to_finish(Position::HomeRun(5), Color::Green), Some(0));
        assert_eq!(distance_to_finish(Position::Base, Color::Red), None);
        assert_eq!(distance_to_finish(Position::Finished, Color::Red), None);
    }

    #[test]
    fn test_full_lap_from_start() {
        // 56 single steps from the start square finish the piece.
        let mut position = Position::Track(start_offset(Color::Yellow));
        for _ in 0..55 {
            position = advance(position, Color::Yellow, 1).unwrap();
            assert_ne!(position, Position::Finished);
        }
        assert_eq!(advance(position, Color::Yellow, 1), Ok(Position::Finished));
    }

    #[test]
    fn test_advance_piece_uses_owner() {
        let mut piece = Piece::at_base(Color::Blue, crate::core::PieceId::new(0));
        piece.position = Position::Track(37);

        assert_eq!(advance_piece(&piece, 1), Ok(Position::HomeRun(0)));
    }
}
