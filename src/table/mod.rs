//! A running game behind a single writer.
//!
//! `Table::spawn` moves an engine and a session into a tokio task and
//! returns a `TableHandle`. All handles share one mailbox, so concurrent
//! callers are serialized. The task ends when the last handle is dropped.
//!
//! Must be called from within a tokio runtime.

mod actor;
mod handle;

pub use handle::TableHandle;

use crate::core::{Dice, GameConfig};
use crate::rules::Engine;
use crate::session::Session;
use actor::TableActor;

/// Entry point for starting tables.
pub struct Table;

impl Table {
    /// Start a fresh game with dice seeded from the config.
    pub fn spawn(config: &GameConfig) -> TableHandle {
        Self::spawn_engine(config, Engine::new(config))
    }

    /// Start a fresh game rolling the given dice.
    pub fn spawn_with_dice<D: Dice + Send + 'static>(config: &GameConfig, dice: D) -> TableHandle {
        Self::spawn_engine(config, Engine::with_dice(config, dice))
    }

    /// Start a table around an existing engine.
    ///
    /// Delays and credentials come from `config`; the game itself from
    /// `engine`.
    pub fn spawn_engine<D: Dice + Send + 'static>(config: &GameConfig, engine: Engine<D>) -> TableHandle {
        let session = Session::new(config.credentials.clone());
        let (commands, state) =
            TableActor::spawn(engine, session, config.roll_delay(), config.pass_delay());
        TableHandle::new(commands, state)
    }
}
