use thiserror::Error;

#[cfg(doc)]
use crate::Solver;

/// Errors related to creating a [`Solver`] and adding clauses to it.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// A problem needs at least one position.
    #[error("The width of a problem must be at least 1")]
    ZeroWidth,
    /// The clause was built for a different number of positions than the [`Solver`] has.
    #[error("The clause has width {actual} but the solver has width {expected}")]
    WidthMismatch { expected: usize, actual: usize },
    /// A customer may ask for the matte finish on at most one position.
    #[error("A clause may require matte at most once, but this one requires it {count} times")]
    MultipleMatte { count: usize },
    #[error("Position {position} is out of range for width {width}")]
    PositionOutOfRange { position: usize, width: usize },
}
