//! Crate-internal test suite.

mod frc;
mod perft;
