//! Core engine types: colors, pieces, state, actions, dice, configuration.
//!
//! This module contains the building blocks the rules operate on. Nothing
//! here decides whether a move is legal; that lives in `rules`.

pub mod action;
pub mod color;
pub mod config;
pub mod error;
pub mod piece;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use action::{Action, ActionRecord};
pub use color::{Color, ColorMap, ParseColorError, COLOR_COUNT};
pub use config::GameConfig;
pub use error::Illegal;
pub use piece::{Piece, PieceId, PieceRef, PieceState, PIECES_PER_PLAYER};
pub use rng::{Dice, DiceRng, DiceRngState, ScriptedDice};
pub use snapshot::GameSnapshot;
pub use state::{GameState, Phase, Player};
