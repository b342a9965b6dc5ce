//! Shogi board representation
//!
//! This module re-exports the board components from their respective submodules.

mod board_repr;
mod trial;

pub use self::board_repr::Board;
pub use self::trial::Trial;
