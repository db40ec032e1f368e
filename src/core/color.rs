//! Seat colors and per-color data storage.
//!
//! ## Color
//!
//! The four fixed seats. Discriminants follow turn order, so the seat index
//! doubles as the rotation applied to the canonical board arm.
//!
//! ## ColorMap
//!
//! Fixed-size per-color storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Number of seats at the table.
pub const COLOR_COUNT: usize = 4;

/// Seat color. Declaration order is turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red = 0,
    Green = 1,
    Yellow = 2,
    Blue = 3,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; COLOR_COUNT] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Get the seat index (0-based, turn order).
    #[must_use]
    pub const fn seat(self) -> usize {
        self as usize
    }

    /// Look up a color by seat index.
    #[must_use]
    pub const fn from_seat(seat: usize) -> Option<Color> {
        if seat < COLOR_COUNT {
            Some(Self::ALL[seat])
        } else {
            None
        }
    }

    /// The color that plays after this one.
    ///
    /// ```
    /// use rust_ludo::core::Color;
    ///
    /// assert_eq!(Color::Red.next(), Color::Green);
    /// assert_eq!(Color::Blue.next(), Color::Red);
    /// ```
    #[must_use]
    pub const fn next(self) -> Color {
        Self::ALL[(self.seat() + 1) % COLOR_COUNT]
    }

    /// Iterate over all colors in turn order.
    pub fn all() -> impl Iterator<Item = Color> {
        Self::ALL.into_iter()
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
        };
        f.write_str(name)
    }
}

/// Error returned when a string names no seat color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::all()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Per-color data storage with O(1) access.
///
/// Always holds exactly one entry per color.
///
/// ## Example
///
/// ```
/// use rust_ludo::core::{Color, ColorMap};
///
/// let mut scores: ColorMap<u32> = ColorMap::new(|c| c.seat() as u32);
/// assert_eq!(scores[Color::Yellow], 2);
///
/// scores[Color::Yellow] = 7;
/// assert_eq!(scores[Color::Yellow], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; COLOR_COUNT],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.seat()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.seat()]
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over the values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
