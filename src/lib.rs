#![deny(missing_docs)]

//! Brute-force backtracking solver for the
//! [eight queens puzzle](https://en.wikipedia.org/wiki/Eight_queens_puzzle):
//! place eight chess queens on an 8×8 chessboard so that no two queens
//! threaten each other.
//!
//! A solution requires that no two queens share the same row, column, or
//! diagonal. The search fills the board one row at a time, trying every
//! column and undoing each placement on return, and reports all 92 solutions.

pub mod board;
pub mod solver;

pub use board::Board;
pub use solver::solve;
