//! Worked problem encodings, used by the integration tests and benchmarks.
//!
//! These modules show how a concrete problem is expressed against the
//! engine's contracts: variables with domains, constraints over them, and an
//! initial assignment seeded from known values.

pub mod map_colouring;
pub mod sudoku;
