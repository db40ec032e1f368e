//! Game state: the single authoritative snapshot of a table.
//!
//! ## GameState
//!
//! - Players and their four pieces each
//! - Whose turn it is and where the turn stands (`Phase`)
//! - Winner and the status line shown to players
//! - Action history
//!
//! Only the rules engine mutates a `GameState` during play. Readers receive
//! clones; the history is an `im` vector so a clone is O(1) regardless of
//! how long the game has run.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::color::{Color, ColorMap};
use super::config::GameConfig;
use super::error::Illegal;
use super::piece::{Piece, PieceId, PieceRef, PIECES_PER_PLAYER};
use crate::board::Position;

/// Where the current turn stands.
///
/// | Phase | pending roll | rolling |
/// |---|---|---|
/// | `AwaitingRoll` | none | no |
/// | `Rolling` | none | yes |
/// | `AwaitingMove` | `roll` | no |
/// | `Passing` | `roll` | no |
/// | `GameOver` | none | no |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The current player may roll.
    AwaitingRoll,
    /// Dice are in the air.
    Rolling,
    /// The roll landed and at least one piece can use it.
    AwaitingMove { roll: u8 },
    /// The roll landed with no legal move; the turn is about to pass.
    Passing { roll: u8 },
    /// Someone has won. Terminal.
    GameOver,
}

impl Phase {
    /// Roll waiting to be used, if any.
    #[must_use]
    pub const fn pending_roll(self) -> Option<u8> {
        match self {
            Phase::AwaitingMove { roll } | Phase::Passing { roll } => Some(roll),
            _ => None,
        }
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
    pub name: String,
    pub pieces: [Piece; PIECES_PER_PLAYER],
}

impl Player {
    /// Create a player with every piece in base.
    #[must_use]
    pub fn new(color: Color, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
            pieces: std::array::from_fn(|i| Piece::at_base(color, PieceId(i as u8))),
        }
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_finished()).count()
    }

    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.finished_count() == PIECES_PER_PLAYER
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: ColorMap<Player>,
    current_turn: Color,
    phase: Phase,
    winner: Option<Color>,
    status_message: String,

    /// Turn number (starts at 1, increments whenever the turn passes).
    turn_number: u32,

    /// Action sequence within the turn.
    action_sequence: u32,

    action_history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a fresh game: every piece in base, Red to roll.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let first = Color::Red;
        Self {
            players: ColorMap::new(|c| Player::new(c, config.player_names[c].clone())),
            current_turn: first,
            phase: Phase::AwaitingRoll,
            winner: None,
            status_message: format!("{}'s turn. Roll the dice!", first),
            turn_number: 1,
            action_sequence: 0,
            action_history: Vector::new(),
        }
    }

    // === Reads ===

    #[must_use]
    pub fn players(&self) -> &ColorMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color]
    }

    #[must_use]
    pub fn piece(&self, piece: PieceRef) -> Option<&Piece> {
        self.players[piece.color].piece(piece.id)
    }

    /// Iterate over every piece on the table, in turn order then id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.players.values().flat_map(|p| p.pieces.iter())
    }

    /// Pieces of any color standing at `position`.
    pub fn pieces_at(&self, position: Position) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.position == position)
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Roll waiting to be used by the current player.
    #[must_use]
    pub fn pending_roll(&self) -> Option<u8> {
        self.phase.pending_roll()
    }

    /// Whether dice are currently in the air.
    #[must_use]
    pub fn roll_in_progress(&self) -> bool {
        self.phase == Phase::Rolling
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn action_history(&self) -> &Vector<ActionRecord> {
        &self.action_history
    }

    // === Trusted setup ===

    /// Put a piece at an arbitrary position.
    ///
    /// State is trusted: no rule is checked. Intended for embedding code
    /// that resumes a game and for tests.
    pub fn place_piece(&mut self, piece: PieceRef, position: Position) -> Result<(), Illegal> {
        let target = self.players[piece.color]
            .piece_mut(piece.id)
            .ok_or(Illegal::UnknownPiece { id: piece.id })?;
        target.position = position;
        Ok(())
    }

    /// Hand the turn to `color`, awaiting a roll.
    ///
    /// A finished game stays over: only the current color changes.
    pub fn set_current_turn(&mut self, color: Color) {
        self.current_turn = color;
        self.action_sequence = 0;
        if self.winner.is_none() {
            self.phase = Phase::AwaitingRoll;
            self.status_message = format!("{}'s turn. Roll the dice!", color);
        }
    }

    // === Engine mutation ===

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub(crate) fn move_to(&mut self, piece: PieceRef, position: Position) {
        if let Some(target) = self.players[piece.color].piece_mut(piece.id) {
            target.position = position;
        }
    }

    pub(crate) fn declare_winner(&mut self, color: Color) {
        self.winner = Some(color);
        self.phase = Phase::GameOver;
    }

    /// Pass the turn to the next color in rotation.
    pub(crate) fn advance_turn(&mut self) -> Color {
        let next = self.current_turn.next();
        self.current_turn = next;
        self.turn_number += 1;
        self.action_sequence = 0;
        self.phase = Phase::AwaitingRoll;
        next
    }

    /// Record an action by the current player.
    pub(crate) fn record(&mut self, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.action_history.push_back(ActionRecord::new(
            self.current_turn,
            action,
            self.turn_number,
            sequence,
        ));
    }

    // === Encoding ===

    /// Compact binary snapshot for handing state across a process or FFI
    /// boundary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceState;

    fn fresh() -> GameState {
        GameState::new(&GameConfig::new(42))
    }

    #[test]
    fn test_fresh_state() {
        let state = fresh();

        assert_eq!(state.current_turn(), Color::Red);
        assert_eq!(state.phase(), Phase::AwaitingRoll);
        assert_eq!(state.pending_roll(), None);
        assert!(!state.roll_in_progress());
        assert_eq!(state.winner(), None);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.status_message(), "Red's turn. Roll the dice!");
        assert!(state.action_history().is_empty());
    }

    #[test]
    fn test_fresh_players() {
        let state = fresh();

        for (color, player) in state.players().iter() {
            assert_eq!(player.color, color);
            assert_eq!(player.name, format!("{} Player", color));
            for (i, piece) in player.pieces.iter().enumerate() {
                assert_eq!(piece.id, PieceId(i as u8));
                assert_eq!(piece.owner, color);
                assert_eq!(piece.state(), PieceState::AtBase);
            }
        }
        assert_eq!(state.pieces().count(), 16);
    }

    #[test]
    fn test_phase_pending_roll() {
        assert_eq!(Phase::AwaitingRoll.pending_roll(), None);
        assert_eq!(Phase::Rolling.pending_roll(), None);
        assert_eq!(Phase::AwaitingMove { roll: 4 }.pending_roll(), Some(4));
        assert_eq!(Phase::Passing { roll: 2 }.pending_roll(), Some(2));
        assert_eq!(Phase::GameOver.pending_roll(), None);
    }

    #[test]
    fn test_place_piece() {
        let mut state = fresh();
        let piece = PieceRef::new(Color::Yellow, PieceId::new(2));

        state.place_piece(piece, Position::Track(30)).unwrap();
        assert_eq!(state.piece(piece).map(|p| p.position), Some(Position::Track(30)));
        assert_eq!(state.pieces_at(Position::Track(30)).count(), 1);

        let missing = PieceRef::new(Color::Yellow, PieceId::new(9));
        assert_eq!(
            state.place_piece(missing, Position::Base),
            Err(Illegal::UnknownPiece { id: PieceId::new(9) })
        );
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = fresh();
        state.set_current_turn(Color::Blue);

        let next = state.advance_turn();

        assert_eq!(next, Color::Red);
        assert_eq!(state.current_turn(), Color::Red);
        assert_eq!(state.turn_number(), 2);
    }

    #[test]
    fn test_record_sequences_within_turn() {
        let mut state = fresh();

        state.record(Action::Roll { value: 6 });
        state.record(Action::Move { piece: PieceId::new(0) });
        state.advance_turn();
        state.record(Action::Roll { value: 3 });

        let history: Vec<_> = state.action_history().iter().cloned().collect();
        assert_eq!(history[0], ActionRecord::new(Color::Red, Action::Roll { value: 6 }, 1, 0));
        assert_eq!(history[1].sequence, 1);
        assert_eq!(history[2], ActionRecord::new(Color::Green, Action::Roll { value: 3 }, 2, 0));
    }

    #[test]
    fn test_declare_winner() {
        let mut state = fresh();
        state.declare_winner(Color::Green);

        assert_eq!(state.winner(), Some(Color::Green));
        assert_eq!(state.phase(), Phase::GameOver);
        assert!(state.is_over());
    }

    #[test]
    fn test_set_current_turn_after_win_stays_over() {
        let mut state = fresh();
        state.declare_winner(Color::Green);
        state.set_current_turn(Color::Blue);

        assert_eq!(state.current_turn(), Color::Blue);
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(state.winner(), Some(Color::Green));
    }

    #[test]
    fn test_bincode_snapshot() {
        let mut state = fresh();
        state
            .place_piece(PieceRef::new(Color::Red, PieceId::new(1)), Position::HomeRun(3))
            .unwrap();
        state.record(Action::Roll { value: 5 });

        let bytes = state.to_bytes().unwrap();
        let decoded = GameState::from_bytes(&bytes).unwrap();

        assert_eq!(state, decoded);
    }

    #[test]
    fn test_json_snapshot() {
        let state = fresh();
        let json = serde_json::to_string(&state).unwrap();
        let decoded: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, decoded);
    }
}
