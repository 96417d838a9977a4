use crate::create_statistics_struct;
use crate::statistics::Counter;

create_statistics_struct!(
    /// Counters of the branch-and-bound search of a single call to
    /// [`Solver::solve`](crate::Solver::solve).
    SearchStatistics {
        /// The number of search steps taken, forced steps included
        num_nodes: Counter,
        /// The number of nodes cut off because they cannot beat the incumbent
        num_pruned_nodes: Counter,
        /// The number of positions fixed to glossy by forced filling
        num_forced_fills: Counter,
        /// The number of positions fixed by unit propagation
        num_unit_propagations: Counter,
        /// The number of nodes at which both finishes of a position were tried
        num_branchings: Counter,
        /// The number of nodes at which some clause could no longer be satisfied
        num_contradictions: Counter,
        /// The number of complete assignments which satisfy every clause
        num_solutions: Counter,
        /// The number of times the incumbent was replaced by a better solution
        num_incumbent_improvements: Counter,
    }
);
