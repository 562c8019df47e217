//! Prize ladder: the fixed sequence of rungs a player climbs.
//!
//! Rung 0 is the lowest prize. The ladder must have at least one rung per
//! question so every correct answer lands on a rung.

mod steps;

pub use steps::{LadderStep, PrizeLadder};
