use log::debug;
use log::warn;

use super::results::OptimisationResult;
use crate::basic_types::Clause;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Finish;
use crate::containers::HashSet;
use crate::engine::BranchAndBound;
use crate::engine::SearchOutcome;
use crate::engine::SearchStatistics;
use crate::options::SolverOptions;
use crate::paintshop_assert_advanced;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The main interaction point which allows the addition of customer requirements and the
/// computation of a finish for every position with as few matte positions as possible.
///
/// ```rust
/// # use paintshop_core::Clause;
/// # use paintshop_core::Finish;
/// # use paintshop_core::results::OptimisationResult;
/// # use paintshop_core::Solver;
/// let mut solver = Solver::new(3).expect("three positions is a valid width");
///
/// // The first customer wants position 0 matte or position 1 glossy.
/// let customer = Clause::new(3, [(0, Finish::Matte), (1, Finish::Glossy)])
///     .expect("positions are in range");
/// solver.add_clause(customer).expect("at most one matte literal");
///
/// // The second customer only accepts position 1 matte.
/// solver
///     .add_clause_from_literals([(1, Finish::Matte)])
///     .expect("valid clause");
///
/// let OptimisationResult::Optimal(solution) = solver.solve() else {
///     panic!("the problem has a solution");
/// };
/// assert_eq!(
///     solution.finishes(),
///     &[Finish::Matte, Finish::Matte, Finish::Glossy]
/// );
/// ```
#[derive(Debug)]
pub struct Solver {
    width: usize,
    options: SolverOptions,
    /// The distinct clauses in order of first addition.
    clauses: Vec<Clause>,
    seen_clauses: HashSet<Clause>,
    statistics: SearchStatistics,
}

impl Solver {
    /// Creates a solver over `width` positions with the default [`SolverOptions`].
    pub fn new(width: usize) -> Result<Solver, ConstraintOperationError> {
        Solver::with_options(width, SolverOptions::default())
    }

    /// Creates a solver over `width` positions with the provided [`SolverOptions`].
    pub fn with_options(
        width: usize,
        options: SolverOptions,
    ) -> Result<Solver, ConstraintOperationError> {
        if width == 0 {
            return Err(ConstraintOperationError::ZeroWidth);
        }

        Ok(Solver {
            width,
            options,
            clauses: Vec::new(),
            seen_clauses: HashSet::default(),
            statistics: SearchStatistics::default(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of distinct clauses added so far.
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// The statistics of the last call to [`Solver::solve`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Adds the requirement of a customer.
    ///
    /// A clause which was added before is ignored. The clause is rejected if it was built for a
    /// different width or if it requires [`Finish::Matte`] on more than one position.
    pub fn add_clause(&mut self, clause: Clause) -> Result<(), ConstraintOperationError> {
        if clause.width() != self.width {
            return Err(ConstraintOperationError::WidthMismatch {
                expected: self.width,
                actual: clause.width(),
            });
        }

        let count = clause.matte_weight();
        if count > 1 {
            return Err(ConstraintOperationError::MultipleMatte { count });
        }

        if clause.weight() == 0 {
            warn!("An empty clause was added, the problem has no solution");
        }

        if self.seen_clauses.insert(clause.clone()) {
            self.clauses.push(clause);
        }

        Ok(())
    }

    /// Adds the clause with the given `(position, finish)` literals, see [`Clause::new`] and
    /// [`Solver::add_clause`].
    pub fn add_clause_from_literals(
        &mut self,
        literals: impl IntoIterator<Item = (usize, Finish)>,
    ) -> Result<(), ConstraintOperationError> {
        let clause = Clause::new(self.width, literals)?;
        self.add_clause(clause)
    }

    /// Computes a finish for every position which satisfies every clause with the fewest possible
    /// matte positions.
    ///
    /// Every call starts a new search, so solving twice gives the same result and the
    /// [`Solver::statistics`] only describe the last call.
    pub fn solve(&mut self) -> OptimisationResult {
        self.statistics = SearchStatistics::default();
        debug!(
            "Solving {} clauses over {} positions (position selection: {}, parallel: {})",
            self.clauses.len(),
            self.width,
            self.options.position_selection,
            self.options.parallel
        );

        let selector = self.options.position_selection.selector();
        let outcome = BranchAndBound::new(selector.as_ref(), &self.statistics, self.options.parallel)
            .solve(self.width, &self.clauses);

        match outcome {
            SearchOutcome::Found(solution) => {
                paintshop_assert_advanced!(
                    self.clauses.iter().all(|clause| solution.satisfies(clause)),
                    "the solution must satisfy every clause"
                );
                debug!(
                    "Found an optimal solution with matte-weight {} after {} nodes",
                    solution.matte_weight(),
                    self.statistics.num_nodes.get()
                );
                OptimisationResult::Optimal(solution)
            }
            SearchOutcome::Unsatisfiable => {
                debug!(
                    "Proved that no solution exists after {} nodes",
                    self.statistics.num_nodes.get()
                );
                OptimisationResult::Unsatisfiable
            }
        }
    }

    /// Logs the statistics of the last search together with the objective value of its result.
    pub fn log_statistics_with_objective(&self, objective_value: usize) {
        log_statistic("objective", objective_value);
        self.log_statistics();
    }

    /// Logs the statistics of the last search.
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::new(["search"]));
        log_statistic_postfix();
    }
}
