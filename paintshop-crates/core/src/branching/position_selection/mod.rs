//! Provides the [`PositionSelector`] trait which is required for position selectors to implement;
//! the main method of this trait is the [`PositionSelector::select_position`] method.
//!
//! The selected position is the one on which the search branches when no forced move is left.
//! Selection has to be deterministic so that solving the same problem twice explores the same
//! tree.
mod input_order;
mod most_occurrences;

use std::fmt::Debug;

pub use input_order::InputOrder;
pub use most_occurrences::MostOccurrences;

use crate::basic_types::Assignment;
use crate::basic_types::Clause;

/// A trait containing the interface for [`PositionSelector`]s, specifying the appropriate hooks
/// into the search.
///
/// Selectors are shared between the branches of a parallel search and hence receive `&self`.
pub trait PositionSelector: Debug + Sync {
    /// Determines which unset position of `assignment` to branch on next, given the clauses
    /// which are still active. Returns [`None`] if and only if every position is fixed.
    fn select_position(&self, assignment: &Assignment, active: &[Clause]) -> Option<usize>;
}
