//! Track layout: lengths, per-color offsets and safe squares.
//!
//! The shared track is 52 squares split into four arms of 13, one per
//! color. Everything color-specific is defined once on a canonical arm
//! (the Red arm) and rotated by `seat * ARM_LEN`:
//!
//! | canonical offset | meaning |
//! |---|---|
//! | `0` | start square (pieces leaving base land here), safe |
//! | `8` | mid-arm safe square |
//! | `TRACK_LEN - 2` | home entrance: last shared square before the lane |
//!
//! ```
//! use rust_ludo::board::topology::{home_entrance, start_offset};
//! use rust_ludo::core::Color;
//!
//! assert_eq!(start_offset(Color::Yellow), 26);
//! assert_eq!(home_entrance(Color::Red), 50);
//! assert_eq!(home_entrance(Color::Green), 11);
//! ```

use crate::core::Color;

/// Squares on the shared circular track.
pub const TRACK_LEN: u8 = 52;

/// Cells in each color's private home-run lane.
pub const HOME_RUN_LEN: u8 = 6;

/// Squares per color arm.
pub const ARM_LEN: u8 = TRACK_LEN / 4;

/// Raw position of a piece waiting in base.
pub const BASE_SENTINEL: i32 = -1;

/// Raw position of a piece that completed its home run.
pub const FINISHED_SENTINEL: i32 = 100;

/// Canonical offset of the home entrance, two squares behind the start.
const CANONICAL_ENTRANCE: u8 = TRACK_LEN - 2;

/// Canonical safe offsets within one arm.
const CANONICAL_SAFE: [u8; 2] = [0, 8];

/// Rotate a canonical (Red) track offset onto `color`'s arm.
#[must_use]
pub const fn rotate(color: Color, canonical: u8) -> u8 {
    // u16 so the sum cannot overflow for any canonical offset
    ((canonical as u16 + color.seat() as u16 * ARM_LEN as u16) % TRACK_LEN as u16) as u8
}

/// Square a piece enters when it leaves base.
#[must_use]
pub const fn start_offset(color: Color) -> u8 {
    rotate(color, 0)
}

/// Last shared square before `color`'s home-run lane.
#[must_use]
pub const fn home_entrance(color: Color) -> u8 {
    rotate(color, CANONICAL_ENTRANCE)
}

/// Whether a shared-track square is capture-immune.
#[must_use]
pub fn is_safe(square: u8) -> bool {
    square < TRACK_LEN && CANONICAL_SAFE.contains(&(square % ARM_LEN))
}

/// All safe squares in ascending order.
pub fn safe_squares() -> impl Iterator<Item = u8> {
    (0..TRACK_LEN).filter(|&s| is_safe(s))
}

/// Forward distance along the circular track from `from` to `to`.
#[must_use]
pub const fn track_distance(from: u8, to: u8) -> u8 {
    ((to as u16 + TRACK_LEN as u16 - from as u16 % TRACK_LEN as u16) % TRACK_LEN as u16) as u8
}
