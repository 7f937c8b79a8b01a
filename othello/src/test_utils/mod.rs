//! Utilities for testing the engine, exported so integration tests and
//! downstream crates can reuse them.

pub mod perft;
