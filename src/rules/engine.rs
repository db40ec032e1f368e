//! Turn/action engine: the only code that mutates a `GameState` in play.
//!
//! ## State machine
//!
//! ```text
//! AwaitingRoll(c) --begin_roll--> Rolling --land_roll--> AwaitingMove(c, r) --move_piece--> AwaitingRoll(c | next)
//!                                                   \--> Passing(c, r) --pass_turn--> AwaitingRoll(next)
//! any winning move --> GameOver
//! ```
//!
//! The roll is split at `begin_roll`/`land_roll` so a driver can animate
//! the dice in between. `roll_dice` does both at once for synchronous use.
//!
//! ## Implementation Notes
//!
//! - Every operation returns `Err(Illegal)` without touching state when its
//!   preconditions fail. Front ends are expected to ignore these.
//! - `move_piece` re-validates through the movement calculator even though
//!   callers normally pick from `legal_pieces`.

use crate::board::Position;
use crate::core::{
    Action, Color, Dice, DiceRng, GameConfig, GameSnapshot, GameState, Illegal, Phase, PieceId,
    PieceRef,
};

use super::capture::{captures_at, Captured};
use super::legal::{legal_pieces, LegalPieces};
use super::movement::{advance, ENTRY_ROLL};

/// What a landed roll allows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// At least one piece can move; waiting for the player's choice.
    MustMove { roll: u8, legal: LegalPieces },
    /// Nothing can move; the turn will pass.
    NoMoves { roll: u8 },
}

impl RollOutcome {
    #[must_use]
    pub fn roll(&self) -> u8 {
        match self {
            RollOutcome::MustMove { roll, .. } | RollOutcome::NoMoves { roll } => *roll,
        }
    }
}

/// Everything a committed move changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceRef,
    pub from: Position,
    pub to: Position,
    /// Opponent pieces sent back to base.
    pub captured: Captured,
    /// The moved piece reached the end of its home run.
    pub finished: bool,
    /// The mover rolls again.
    pub extra_turn: bool,
    /// Set when this move won the game.
    pub winner: Option<Color>,
}

/// Rules engine owning one game.
///
/// Generic over the dice so tests and replays can load them.
#[derive(Clone, Debug)]
pub struct Engine<D = DiceRng> {
    state: GameState,
    dice: D,
}

impl Engine<DiceRng> {
    /// Start a fresh game with dice seeded from the config.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_dice(config, DiceRng::new(config.seed))
    }

    /// Capture the state together with the dice position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.state.clone(), &self.dice)
    }

    /// Resume a snapshot; the dice continue where they stopped.
    #[must_use]
    pub fn restore(snapshot: &GameSnapshot) -> Self {
        Self::from_state(snapshot.state.clone(), snapshot.restore_dice())
    }
}

impl<D: Dice> Engine<D> {
    /// Start a fresh game rolling the given dice.
    #[must_use]
    pub fn with_dice(config: &GameConfig, dice: D) -> Self {
        Self::from_state(GameState::new(config), dice)
    }

    /// Resume from an existing state.
    #[must_use]
    pub fn from_state(state: GameState, dice: D) -> Self {
        Self { state, dice }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for trusted setup (see `GameState::place_piece`).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.state.winner()
    }

    /// Pieces the current player may move with the pending roll.
    ///
    /// Empty when no roll is pending.
    #[must_use]
    pub fn legal_pieces(&self) -> LegalPieces {
        match self.state.pending_roll() {
            Some(roll) => legal_pieces(&self.state, self.state.current_turn(), roll),
            None => LegalPieces::new(),
        }
    }

    fn ensure_not_over(&self) -> Result<(), Illegal> {
        match self.state.winner() {
            Some(winner) => Err(Illegal::GameOver { winner }),
            None => Ok(()),
        }
    }

    // === Rolling ===

    /// Throw the dice: the current player must be awaiting a roll.
    pub fn begin_roll(&mut self) -> Result<(), Illegal> {
        self.ensure_not_over()?;
        match self.state.phase() {
            Phase::AwaitingRoll => {}
            Phase::Rolling => return Err(Illegal::RollInProgress),
            _ => return Err(Illegal::NotAwaitingRoll),
        }

        self.state.set_phase(Phase::Rolling);
        tracing::trace!(color = %self.state.current_turn(), "dice rolling");
        Ok(())
    }

    /// Let the dice land and decide whether the roll can be used.
    pub fn land_roll(&mut self) -> Result<RollOutcome, Illegal> {
        self.ensure_not_over()?;
        if self.state.phase() != Phase::Rolling {
            return Err(Illegal::NotRolling);
        }

        let color = self.state.current_turn();
        let roll = self.dice.roll();
        debug_assert!((1..=6).contains(&roll), "dice returned {}", roll);
        self.state.record(Action::Roll { value: roll });

        let legal = legal_pieces(&self.state, color, roll);
        tracing::debug!(color = %color, roll, legal = legal.len(), "dice landed");

        if legal.is_empty() {
            self.state.set_phase(Phase::Passing { roll });
            self.state.set_status(format!("No moves for {}. Passing turn.", color));
            Ok(RollOutcome::NoMoves { roll })
        } else {
            self.state.set_phase(Phase::AwaitingMove { roll });
            self.state.set_status(format!("{}, move a piece.", color));
            Ok(RollOutcome::MustMove { roll, legal })
        }
    }

    /// Roll without a delay between throw and landing.
    pub fn roll_dice(&mut self) -> Result<RollOutcome, Illegal> {
        self.begin_roll()?;
        self.land_roll()
    }

    /// Give up a roll that has no legal move and pass the turn.
    ///
    /// Returns the color now on turn.
    pub fn pass_turn(&mut self) -> Result<Color, Illegal> {
        self.ensure_not_over()?;
        if !matches!(self.state.phase(), Phase::Passing { .. }) {
            return Err(Illegal::NotPassing);
        }

        self.state.record(Action::Pass);
        let next = self.next_turn();
        tracing::debug!(next = %next, "turn passed without a move");
        Ok(next)
    }

    // === Moving ===

    /// Move one of the current player's pieces by the pending roll.
    pub fn move_piece(&mut self, color: Color, id: PieceId) -> Result<MoveOutcome, Illegal> {
        self.ensure_not_over()?;
        let roll = match self.state.phase() {
            Phase::AwaitingMove { roll } => roll,
            _ => return Err(Illegal::NoPendingRoll),
        };

        let expected = self.state.current_turn();
        if color != expected {
            return Err(Illegal::NotYourTurn {
                expected,
                got: color,
            });
        }

        let piece = PieceRef::new(color, id);
        let from = self
            .state
            .piece(piece)
            .map(|p| p.position)
            .ok_or(Illegal::UnknownPiece { id })?;
        let to = advance(from, color, roll)?;

        // Validated: commit.
        self.state.move_to(piece, to);
        self.state.record(Action::Move { piece: id });

        let finished = to == Position::Finished;
        let captured = captures_at(&self.state, color, to);
        for victim in &captured {
            self.state.move_to(*victim, Position::Base);
        }
        if !captured.is_empty() {
            tracing::info!(mover = %piece, victims = captured.len(), square = %to, "capture");
        }

        let extra_turn = roll == ENTRY_ROLL || finished || !captured.is_empty();
        tracing::debug!(piece = %piece, from = %from, to = %to, roll, extra_turn, "piece moved");

        let winner = if self.state.player(color).all_finished() {
            self.state.declare_winner(color);
            self.state.set_status(format!("{} wins the game!", color.name().to_uppercase()));
            tracing::info!(winner = %color, turn = self.state.turn_number(), "game over");
            Some(color)
        } else if extra_turn {
            self.state.set_phase(Phase::AwaitingRoll);
            self.state.set_status(format!("{}'s turn. Roll again!", color));
            None
        } else {
            self.next_turn();
            None
        };

        Ok(MoveOutcome {
            piece,
            from,
            to,
            captured,
            finished,
            extra_turn,
            winner,
        })
    }

    fn next_turn(&mut self) -> Color {
        let next = self.state.advance_turn();
        self.state.set_status(format!("{}'s turn. Roll the dice!", next));
        next
    }
}
