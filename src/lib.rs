//! # rust-ludo
//!
//! Rules engine for four-player Ludo.
//!
//! ## Design Principles
//!
//! 1. **One authoritative state**: a `GameState` is only ever mutated by the
//!    rules `Engine`. Everything else reads snapshots.
//!
//! 2. **One topology**: the four colors share a single board geometry,
//!    rotated by seat. No per-color path tables.
//!
//! 3. **Rejections are values**: an illegal roll or move returns
//!    `Err(Illegal)` and leaves the state untouched.
//!
//! ## Architecture
//!
//! - **Synchronous core**: `Engine` applies rolls and moves immediately and
//!   is generic over its `Dice`, so games replay from a seed or a script.
//!
//! - **Table actor**: `Table::spawn` runs an engine inside a tokio task with
//!   the dice animation and forfeited-roll delays. Handles talk to it
//!   through a mailbox and watch the state through a `watch` channel.
//!
//! - **Cheap snapshots**: the action history is an `im` vector, so cloning a
//!   state for every published update stays O(1).
//!
//! ## Modules
//!
//! - `core`: colors, pieces, state, actions, dice, configuration
//! - `board`: track topology and typed positions
//! - `rules`: movement, legality, captures and the turn engine
//! - `session`: login and the logged-in user
//! - `table`: async single-writer host with presentation delays
//! - `python`: PyO3 bindings (feature `python`)

pub mod board;
pub mod core;
pub mod rules;
pub mod session;
pub mod table;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    Color, ColorMap,
    Dice, DiceRng, ScriptedDice,
    GameConfig, GameSnapshot, GameState, Illegal, Phase,
    Piece, PieceId, PieceRef, PieceState, Player,
};

pub use crate::board::Position;

pub use crate::rules::{Engine, MoveOutcome, RollOutcome};

pub use crate::session::{Credentials, LoginError, Role, Session, User};

pub use crate::table::{Table, TableHandle};
