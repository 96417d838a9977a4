pub mod results;
pub(crate) mod solver;

pub use solver::Solver;
