//! The task that owns a game.
//!
//! Every request arrives through one mailbox and is applied in order, so
//! at most one mutation is in flight per table no matter how many handles
//! exist. Dice animation and the forfeited-roll pause are timers that post
//! back into a second, internal channel; they are never cancelled.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};

use crate::core::{Color, Dice, GameState, PieceId};
use crate::rules::{Engine, RollOutcome};
use crate::session::{Session, User};

/// Requests from handles.
#[derive(Debug)]
pub(crate) enum Command {
    RollDice,
    MovePiece {
        color: Color,
        piece: PieceId,
    },
    Login {
        username: String,
        password: String,
        reply: oneshot::Sender<bool>,
    },
    Logout,
    CurrentUser {
        reply: oneshot::Sender<Option<User>>,
    },
}

/// Delayed steps the actor schedules for itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    RollLanded,
    PassElapsed,
}

pub(crate) struct TableActor<D> {
    engine: Engine<D>,
    session: Session,
    roll_delay: Duration,
    pass_delay: Duration,
    state_tx: watch::Sender<GameState>,
    timer_tx: mpsc::UnboundedSender<Timer>,
}

impl<D: Dice + Send + 'static> TableActor<D> {
    /// Spawn the actor task. Returns the mailbox sender and the state feed.
    pub(crate) fn spawn(
        engine: Engine<D>,
        session: Session,
        roll_delay: Duration,
        pass_delay: Duration,
    ) -> (mpsc::UnboundedSender<Command>, watch::Receiver<GameState>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(engine.state().clone());

        let actor = Self {
            engine,
            session,
            roll_delay,
            pass_delay,
            state_tx,
            timer_tx,
        };
        tokio::spawn(actor.run(command_rx, timer_rx));

        (command_tx, state_rx)
    }

    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut timers: mpsc::UnboundedReceiver<Timer>,
    ) {
        tracing::debug!("table opened");
        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    self.handle_command(command);
                }
                Some(timer) = timers.recv() => self.handle_timer(timer),
            }
        }
        tracing::debug!("table closed: all handles dropped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::RollDice => match self.engine.begin_roll() {
                Ok(()) => {
                    self.publish();
                    self.schedule(Timer::RollLanded, self.roll_delay);
                }
                Err(e) => tracing::debug!(reason = %e, "roll ignored"),
            },
            Command::MovePiece { color, piece } => match self.engine.move_piece(color, piece) {
                Ok(_) => self.publish(),
                Err(e) => tracing::debug!(color = %color, piece = %piece, reason = %e, "move ignored"),
            },
            Command::Login {
                username,
                password,
                reply,
            } => {
                let accepted = self.session.login(&username, &password);
                let _ = reply.send(accepted);
            }
            Command::Logout => self.session.logout(),
            Command::CurrentUser { reply } => {
                let _ = reply.send(self.session.user().cloned());
            }
        }
    }

    fn handle_timer(&mut self, timer: Timer) {
        match timer {
            Timer::RollLanded => match self.engine.land_roll() {
                Ok(RollOutcome::NoMoves { .. }) => {
                    self.publish();
                    self.schedule(Timer::PassElapsed, self.pass_delay);
                }
                Ok(RollOutcome::MustMove { .. }) => self.publish(),
                Err(e) => tracing::warn!(reason = %e, "roll timer fired out of phase"),
            },
            Timer::PassElapsed => match self.engine.pass_turn() {
                Ok(_) => self.publish(),
                Err(e) => tracing::warn!(reason = %e, "pass timer fired out of phase"),
            },
        }
    }

    fn schedule(&self, timer: Timer, delay: Duration) {
        let tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Closed only when the table has shut down.
            let _ = tx.send(timer);
        });
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.engine.state().clone());
    }
}
