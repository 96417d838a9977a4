//! # Paintshop Solver
//! The library behind the `paintshop-solver` binary. It re-exports [`paintshop_core`], see its
//! documentation for how to build and solve a problem.
//!
//! The binary reads a problem from a text file:
//!
//! ```text
//! # The number of positions comes first.
//! 5
//! # Every other line is one customer: pairs of a 1-based position and a finish.
//! 1 M 3 G 5 G
//! 2 G 3 M 4 G
//! 5 M
//! ```
//!
//! It prints the finish of every position in order, `G G G G M` for the problem above, or
//! `No solution` if no assignment satisfies every customer.
pub use paintshop_core::*;
