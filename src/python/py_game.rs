//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{Color, DiceRng, GameConfig, GameSnapshot, PieceId, PieceRef};
use crate::rules::{Engine, MoveOutcome};

fn parse_color(name: &str) -> PyResult<Color> {
    name.parse::<Color>()
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Python view of a committed move.
#[pyclass(name = "MoveOutcome")]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome(pub MoveOutcome);

#[pymethods]
impl PyMoveOutcome {
    #[getter]
    fn color(&self) -> &'static str {
        self.0.piece.color.name()
    }

    #[getter]
    fn piece(&self) -> u8 {
        self.0.piece.id.0
    }

    /// Raw position before the move.
    #[getter]
    fn from_position(&self) -> i32 {
        self.0.from.raw()
    }

    /// Raw position after the move.
    #[getter]
    fn to_position(&self) -> i32 {
        self.0.to.raw()
    }

    /// Captured pieces as `(color, id)` pairs.
    #[getter]
    fn captured(&self) -> Vec<(&'static str, u8)> {
        self.0
            .captured
            .iter()
            .map(|p| (p.color.name(), p.id.0))
            .collect()
    }

    #[getter]
    fn finished(&self) -> bool {
        self.0.finished
    }

    #[getter]
    fn extra_turn(&self) -> bool {
        self.0.extra_turn
    }

    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.0.winner.map(Color::name)
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveOutcome({} {} -> {}, captured={}, extra_turn={})",
            self.0.piece,
            self.0.from,
            self.0.to,
            self.0.captured.len(),
            self.0.extra_turn
        )
    }
}

/// Python wrapper for a synchronous Ludo game.
///
/// Colors are passed and returned as lowercase names
/// (`"red"`, `"green"`, `"yellow"`, `"blue"`). Positions use the raw
/// integer encoding: -1 base, 0-51 track, 52-57 home run, 100 finished.
#[pyclass(name = "LudoGame")]
pub struct PyLudoGame {
    engine: Engine<DiceRng>,
}

#[pymethods]
impl PyLudoGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic dice
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        Self {
            engine: Engine::new(&GameConfig::new(seed)),
        }
    }

    /// Roll the dice. Returns the value, or `None` if a roll is not allowed now.
    fn roll_dice(&mut self) -> Option<u8> {
        self.engine.roll_dice().ok().map(|outcome| outcome.roll())
    }

    /// Give up a roll that has no legal move. Returns whether the turn passed.
    fn pass_turn(&mut self) -> bool {
        self.engine.pass_turn().is_ok()
    }

    /// Move a piece by the pending roll.
    ///
    /// Returns `None` when the move is not allowed.
    fn move_piece(&mut self, color: &str, piece: u8) -> PyResult<Option<PyMoveOutcome>> {
        let color = parse_color(color)?;
        Ok(self
            .engine
            .move_piece(color, PieceId::new(piece))
            .ok()
            .map(PyMoveOutcome))
    }

    /// Ids of the current player's pieces that can use the pending roll.
    fn legal_pieces(&self) -> Vec<u8> {
        self.engine.legal_pieces().iter().map(|id| id.0).collect()
    }

    /// Raw positions of a color's four pieces, by id.
    fn positions(&self, color: &str) -> PyResult<Vec<i32>> {
        let color = parse_color(color)?;
        Ok(self
            .engine
            .state()
            .player(color)
            .pieces
            .iter()
            .map(|p| p.raw_position())
            .collect())
    }

    /// Raw position of a single piece.
    fn position(&self, color: &str, piece: u8) -> PyResult<i32> {
        let color = parse_color(color)?;
        self.engine
            .state()
            .piece(PieceRef::new(color, PieceId::new(piece)))
            .map(|p| p.raw_position())
            .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("no piece with id {}", piece)))
    }

    #[getter]
    fn current_turn(&self) -> &'static str {
        self.engine.state().current_turn().name()
    }

    #[getter]
    fn pending_roll(&self) -> Option<u8> {
        self.engine.state().pending_roll()
    }

    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.engine.winner().map(Color::name)
    }

    #[getter]
    fn status_message(&self) -> String {
        self.engine.state().status_message().to_string()
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.engine.state().turn_number()
    }

    /// Encode the game and the dice position as bytes.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self
            .engine
            .snapshot()
            .to_bytes()
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Resume a game from `snapshot()` bytes. The dice continue where they
    /// stopped.
    #[staticmethod]
    fn from_snapshot(data: &[u8]) -> PyResult<Self> {
        let snapshot = GameSnapshot::from_bytes(data)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        Ok(Self {
            engine: Engine::restore(&snapshot),
        })
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        match state.winner() {
            Some(winner) => format!("LudoGame(turn={}, winner={})", state.turn_number(), winner.name()),
            None => format!(
                "LudoGame(turn={}, current={})",
                state.turn_number(),
                state.current_turn().name()
            ),
        }
    }
}
