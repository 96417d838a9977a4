//! The search engine: clause reduction, forced moves and the branch-and-bound search which ties
//! them together.
mod active_clauses;
mod forced_fill;
mod incumbent;
mod search;
mod search_statistics;
mod unit_propagation;

pub(crate) use search::BranchAndBound;
pub(crate) use search::SearchOutcome;
pub use search_statistics::SearchStatistics;
