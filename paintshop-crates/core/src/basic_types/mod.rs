mod assignment;
mod clause;
mod constraint_operation_error;
mod finish;
mod solution;

pub use assignment::Assignment;
pub use clause::Clause;
pub use constraint_operation_error::ConstraintOperationError;
pub use finish::Finish;
pub use solution::Solution;
