//! Game rules.
//!
//! - `movement`: where a roll takes a piece
//! - `legal`: which pieces can use a roll
//! - `capture`: who gets sent home by a landing
//! - `engine`: the state machine that commits rolls and moves
//!
//! The engine calls the legality filter, which calls the movement
//! calculator. Only the engine mutates state.

pub mod capture;
pub mod engine;
pub mod legal;
pub mod movement;

pub use capture::{captures_at, Captured};
pub use engine::{Engine, MoveOutcome, RollOutcome};
pub use legal::{is_legal, legal_pieces, LegalPieces};
pub use movement::{advance, advance_piece, distance_to_finish, ENTRY_ROLL};
