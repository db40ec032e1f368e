//! Client side of a table.

use tokio::sync::{mpsc, oneshot, watch};

use super::actor::Command;
use crate::core::{Color, GameState, PieceId};
use crate::session::User;

/// Cheap, cloneable handle to a running table.
///
/// Mutating calls are fire-and-forget: their effect becomes visible through
/// `state()` or `subscribe()` once the table has applied them. Calls the
/// rules refuse are silently ignored.
#[derive(Clone, Debug)]
pub struct TableHandle {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<GameState>,
}

impl TableHandle {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<Command>,
        state: watch::Receiver<GameState>,
    ) -> Self {
        Self { commands, state }
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            tracing::debug!("table is closed; request dropped");
        }
    }

    /// Ask the current player's dice to be rolled.
    pub fn roll_dice(&self) {
        self.send(Command::RollDice);
    }

    /// Ask for one of `color`'s pieces to be moved by the pending roll.
    pub fn move_piece(&self, color: Color, piece: PieceId) {
        self.send(Command::MovePiece { color, piece });
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every applied transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.state.clone()
    }

    /// Log in. Returns `false` for bad credentials or a closed table.
    pub async fn login(&self, username: impl Into<String>, password: impl Into<String>) -> bool {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Login {
            username: username.into(),
            password: password.into(),
            reply,
        });
        rx.await.unwrap_or(false)
    }

    pub fn logout(&self) {
        self.send(Command::Logout);
    }

    /// The logged-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::CurrentUser { reply });
        rx.await.ok().flatten()
    }
}
