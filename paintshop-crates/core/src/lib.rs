//! # Paintshop
//! A branch-and-bound solver for the paint shop problem: every position of a batch receives either
//! a [`Finish::Glossy`] or a [`Finish::Matte`] finish such that every customer gets at least one of
//! the finishes they asked for, while as few positions as possible are matte.
//!
//! The requirement of a customer is a [`Clause`]: a disjunction of `(position, finish)` literals
//! in which at most one literal asks for matte. This restriction is what makes the two deductions
//! of the search sound:
//! - a position which no open clause wants matte can be made glossy without loss;
//! - the only literal of a clause with a single open position is forced.
//!
//! When neither applies the search branches on a position, trying glossy before matte, and prunes
//! every branch that cannot beat the best solution found so far.
//!
//! # Using the Solver
//! The problem is created by giving the number of positions and adding clauses, after which
//! [`Solver::solve`] returns an [`OptimisationResult`](results::OptimisationResult).
//!
//! ```rust
//! # use paintshop_core::Finish;
//! # use paintshop_core::results::OptimisationResult;
//! # use paintshop_core::Solver;
//! let mut solver = Solver::new(5).expect("five positions is a valid width");
//!
//! // A single customer who wants position 2 matte.
//! solver
//!     .add_clause_from_literals([(2, Finish::Matte)])
//!     .expect("valid clause");
//!
//! let result = solver.solve();
//! let OptimisationResult::Optimal(solution) = result else {
//!     panic!("the problem has a solution");
//! };
//!
//! // Every other position is glossy.
//! assert_eq!(solution.matte_weight(), 1);
//! assert_eq!(solution.get(2), Finish::Matte);
//! ```
//!
//! A problem in which two customers want the same position with different finishes has no
//! solution:
//!
//! ```rust
//! # use paintshop_core::Finish;
//! # use paintshop_core::results::OptimisationResult;
//! # use paintshop_core::Solver;
//! let mut solver = Solver::new(1).expect("valid width");
//! solver
//!     .add_clause_from_literals([(0, Finish::Glossy)])
//!     .expect("valid clause");
//! solver
//!     .add_clause_from_literals([(0, Finish::Matte)])
//!     .expect("valid clause");
//!
//! assert_eq!(solver.solve(), OptimisationResult::Unsatisfiable);
//! ```
//!
//! The search can be configured through [`SolverOptions`](options::SolverOptions), for example to
//! explore both children of a branching node concurrently.
pub(crate) mod basic_types;
pub(crate) mod engine;

pub mod asserts;
pub mod branching;
pub mod containers;
pub mod options;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
mod api;

pub use api::*;

pub use crate::basic_types::Assignment;
pub use crate::basic_types::Clause;
pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::Finish;
pub use crate::basic_types::Solution;
pub use crate::engine::SearchStatistics;
