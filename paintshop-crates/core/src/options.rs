//! Options which determine how the [`Solver`] searches.
use std::fmt::Display;

use crate::branching::position_selection::InputOrder;
use crate::branching::position_selection::MostOccurrences;
use crate::branching::PositionSelector;
#[cfg(doc)]
use crate::Solver;

/// Options for the [`Solver`] which determine how it behaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverOptions {
    /// The rule which decides the position to branch on when no forced move is left.
    pub position_selection: PositionSelectionStrategy,
    /// Whether the two children of a branching node are explored concurrently.
    pub parallel: bool,
}

/// The rule used to select the position on which the search branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PositionSelectionStrategy {
    /// Branch on the unset position with the lowest index.
    #[default]
    InputOrder,
    /// Branch on the unset position which occurs in the largest number of active clauses, the
    /// lowest index winning ties.
    MostOccurrences,
}

impl PositionSelectionStrategy {
    pub(crate) fn selector(self) -> Box<dyn PositionSelector> {
        match self {
            PositionSelectionStrategy::InputOrder => Box::new(InputOrder),
            PositionSelectionStrategy::MostOccurrences => Box::new(MostOccurrences),
        }
    }
}

impl Display for PositionSelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionSelectionStrategy::InputOrder => write!(f, "input-order"),
            PositionSelectionStrategy::MostOccurrences => write!(f, "most-occurrences"),
        }
    }
}
