//! Board topology and piece positions.
//!
//! Pure data: nothing here depends on game state.

pub mod position;
pub mod topology;

pub use position::Position;
pub use topology::{
    home_entrance, is_safe, start_offset, track_distance, ARM_LEN, HOME_RUN_LEN, TRACK_LEN,
};
