//! Contains the outputs of solving using the [`Solver`].
use crate::basic_types::Solution;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimisationResult {
    /// Indicates that an optimal solution has been found and proven to be optimal: no solution
    /// with fewer matte positions exists.
    Optimal(Solution),
    /// Indicates that there is no solution to the problem.
    Unsatisfiable,
}

impl OptimisationResult {
    /// The optimal solution, if there is one.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            OptimisationResult::Optimal(solution) => Some(solution),
            OptimisationResult::Unsatisfiable => None,
        }
    }

    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, OptimisationResult::Unsatisfiable)
    }
}
