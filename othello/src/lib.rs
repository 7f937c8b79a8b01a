//! `othello` is a small, deterministic Othello (Reversi) rules library.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds the raw 8x8 cell grid and the piece dynamics:
//!    directional capture scanning, placement with flips, and counting.
//!    It has no notion of whose turn it is.
//!  - [`GameState`] owns a [`Board`] plus the active [`Player`] and exposes
//!    the full turn cycle: move validation and enumeration, placement,
//!    forced passes, termination, and scoring.
//!
//! All rejection is reported through boolean returns; no operation panics
//! on a bad move, and a rejected move leaves the state untouched.

pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
