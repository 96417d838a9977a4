use std::borrow::Cow;

use log::debug;
use log::trace;

use super::active_clauses::reduce_active_clauses;
use super::active_clauses::ClauseReduction;
use super::forced_fill::default_fill;
use super::incumbent::Incumbent;
use super::unit_propagation::find_unit_literal;
use super::SearchStatistics;
use crate::basic_types::Assignment;
use crate::basic_types::Clause;
use crate::basic_types::Finish;
use crate::basic_types::Solution;
use crate::branching::PositionSelector;
use crate::paintshop_assert_moderate;

/// The outcome of searching the subtree below a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// The best solution in the subtree which could improve on the incumbent at the time it was
    /// explored.
    Found(Solution),
    /// The subtree has no solution, or none that beats the incumbent.
    Unsatisfiable,
}

impl SearchOutcome {
    /// Combines the outcomes of the two children of a branching node. On equal matte-weight the
    /// glossy child is kept.
    fn better_of(glossy: SearchOutcome, matte: SearchOutcome) -> SearchOutcome {
        match (glossy, matte) {
            (SearchOutcome::Found(glossy), SearchOutcome::Found(matte)) => {
                if matte.matte_weight() < glossy.matte_weight() {
                    SearchOutcome::Found(matte)
                } else {
                    SearchOutcome::Found(glossy)
                }
            }
            (found @ SearchOutcome::Found(_), SearchOutcome::Unsatisfiable)
            | (SearchOutcome::Unsatisfiable, found @ SearchOutcome::Found(_)) => found,
            (SearchOutcome::Unsatisfiable, SearchOutcome::Unsatisfiable) => {
                SearchOutcome::Unsatisfiable
            }
        }
    }
}

/// Branch-and-bound search for an assignment which satisfies every clause with as few matte
/// positions as possible.
///
/// Every node first fills the positions nobody wants matte with glossy, then reduces its clauses,
/// then fixes forced literals, and only then branches on a position chosen by the
/// [`PositionSelector`]. A node is cut off as soon as it has as many matte positions as the
/// incumbent.
#[derive(Debug)]
pub(crate) struct BranchAndBound<'a> {
    incumbent: Incumbent,
    selector: &'a dyn PositionSelector,
    statistics: &'a SearchStatistics,
    parallel: bool,
}

impl<'a> BranchAndBound<'a> {
    pub(crate) fn new(
        selector: &'a dyn PositionSelector,
        statistics: &'a SearchStatistics,
        parallel: bool,
    ) -> BranchAndBound<'a> {
        BranchAndBound {
            incumbent: Incumbent::empty(),
            selector,
            statistics,
            parallel,
        }
    }

    /// Searches from the all-unset assignment over `width` positions. The `clauses` are expected
    /// to be deduplicated.
    pub(crate) fn solve(self, width: usize, clauses: &[Clause]) -> SearchOutcome {
        let outcome = self.search(clauses, Assignment::unassigned(width));
        let best = self.incumbent.into_best();

        match outcome {
            SearchOutcome::Found(solution) => {
                paintshop_assert_moderate!(
                    best.as_ref()
                        .is_some_and(|best| best.matte_weight() == solution.matte_weight()),
                    "the root result must be as good as the incumbent"
                );
                SearchOutcome::Found(solution)
            }
            SearchOutcome::Unsatisfiable => {
                paintshop_assert_moderate!(best.is_none());
                SearchOutcome::Unsatisfiable
            }
        }
    }

    fn search(&self, clauses: &[Clause], assignment: Assignment) -> SearchOutcome {
        let mut active = Cow::Borrowed(clauses);
        let mut assignment = assignment;

        // Forced moves continue in this loop; only branching recurses.
        loop {
            self.statistics.num_nodes.increment();

            if !self.incumbent.can_be_improved_by(assignment.matte_weight()) {
                self.statistics.num_pruned_nodes.increment();
                return SearchOutcome::Unsatisfiable;
            }

            let filled = default_fill(&active, &assignment);
            self.statistics
                .num_forced_fills
                .add((assignment.num_unset() - filled.num_unset()) as u64);
            assignment = filled;

            let reduced = match reduce_active_clauses(&active, &assignment) {
                ClauseReduction::Active(reduced) => reduced,
                ClauseReduction::Falsified => {
                    self.statistics.num_contradictions.increment();
                    return SearchOutcome::Unsatisfiable;
                }
            };

            if reduced.is_empty() {
                let solution = assignment.complete_with_glossy();
                self.statistics.num_solutions.increment();
                self.record(&solution);
                return SearchOutcome::Found(solution);
            }

            if assignment.is_complete() {
                self.statistics.num_contradictions.increment();
                return SearchOutcome::Unsatisfiable;
            }

            if let Some((position, finish)) = find_unit_literal(&reduced) {
                self.statistics.num_unit_propagations.increment();
                assignment = assignment.with(position, finish);
                active = Cow::Owned(reduced);
                continue;
            }

            let position = self
                .selector
                .select_position(&assignment, &reduced)
                .expect("an incomplete assignment has an unset position");
            self.statistics.num_branchings.increment();
            trace!(
                "Branching on position {position} with {} active clauses and {} unset positions",
                reduced.len(),
                assignment.num_unset()
            );

            let glossy = assignment.with(position, Finish::Glossy);
            let matte = assignment.with(position, Finish::Matte);
            let (glossy_outcome, matte_outcome) = self.branch(
                || self.search(&reduced, glossy),
                || self.search(&reduced, matte),
            );

            let outcome = SearchOutcome::better_of(glossy_outcome, matte_outcome);
            if let SearchOutcome::Found(solution) = &outcome {
                self.record(solution);
            }
            return outcome;
        }
    }

    /// Explores both children, concurrently if the search is parallel.
    fn branch<G, M>(&self, glossy: G, matte: M) -> (SearchOutcome, SearchOutcome)
    where
        G: FnOnce() -> SearchOutcome + Send,
        M: FnOnce() -> SearchOutcome + Send,
    {
        if self.parallel {
            rayon::join(glossy, matte)
        } else {
            (glossy(), matte())
        }
    }

    fn record(&self, solution: &Solution) {
        if self.incumbent.offer(solution) {
            self.statistics.num_incumbent_improvements.increment();
            debug!(
                "New incumbent with matte-weight {}",
                solution.matte_weight()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::position_selection::InputOrder;
    use crate::branching::position_selection::MostOccurrences;

    fn clause(width: usize, literals: &[(usize, Finish)]) -> Clause {
        Clause::new(width, literals.iter().copied()).expect("valid clause")
    }

    fn solve(width: usize, clauses: &[Clause]) -> (SearchOutcome, SearchStatistics) {
        let statistics = SearchStatistics::default();
        let outcome = BranchAndBound::new(&InputOrder, &statistics, false).solve(width, clauses);
        (outcome, statistics)
    }

    fn expect_found(outcome: SearchOutcome) -> Solution {
        match outcome {
            SearchOutcome::Found(solution) => solution,
            SearchOutcome::Unsatisfiable => panic!("expected a solution"),
        }
    }

    #[test]
    fn single_glossy_requirement() {
        let (outcome, _) = solve(1, &[clause(1, &[(0, Finish::Glossy)])]);

        assert_eq!(expect_found(outcome).finishes(), &[Finish::Glossy]);
    }

    #[test]
    fn single_matte_requirement() {
        let (outcome, _) = solve(1, &[clause(1, &[(0, Finish::Matte)])]);

        assert_eq!(expect_found(outcome).finishes(), &[Finish::Matte]);
    }

    #[test]
    fn contradicting_requirements_have_no_solution() {
        let (outcome, statistics) = solve(
            1,
            &[
                clause(1, &[(0, Finish::Glossy)]),
                clause(1, &[(0, Finish::Matte)]),
            ],
        );

        assert_eq!(outcome, SearchOutcome::Unsatisfiable);
        assert_eq!(statistics.num_solutions.get(), 0);
    }

    #[test]
    fn glossy_requirements_are_free() {
        let (outcome, _) = solve(
            2,
            &[
                clause(2, &[(0, Finish::Glossy)]),
                clause(2, &[(1, Finish::Glossy)]),
            ],
        );

        let solution = expect_found(outcome);
        assert_eq!(solution.finishes(), &[Finish::Glossy, Finish::Glossy]);
        assert_eq!(solution.matte_weight(), 0);
    }

    #[test]
    fn independent_matte_requirements_are_all_met() {
        let (outcome, statistics) = solve(
            3,
            &[
                clause(3, &[(0, Finish::Matte)]),
                clause(3, &[(1, Finish::Matte)]),
                clause(3, &[(2, Finish::Matte)]),
            ],
        );

        let solution = expect_found(outcome);
        assert_eq!(solution.finishes(), &[Finish::Matte; 3]);
        assert_eq!(statistics.num_unit_propagations.get(), 3);
        assert_eq!(statistics.num_branchings.get(), 0);
    }

    #[test]
    fn forced_fill_covers_unconstrained_positions() {
        let (outcome, statistics) = solve(5, &[clause(5, &[(2, Finish::Matte)])]);

        let solution = expect_found(outcome);
        assert_eq!(
            solution.finishes(),
            &[
                Finish::Glossy,
                Finish::Glossy,
                Finish::Matte,
                Finish::Glossy,
                Finish::Glossy
            ]
        );
        assert_eq!(solution.matte_weight(), 1);
        assert_eq!(statistics.num_forced_fills.get(), 4);
    }

    #[test]
    fn glossy_child_is_explored_first() {
        // All glossy satisfies every clause, but no position is forced.
        let clauses = vec![
            clause(3, &[(0, Finish::Matte), (1, Finish::Glossy)]),
            clause(3, &[(1, Finish::Matte), (2, Finish::Glossy)]),
            clause(3, &[(2, Finish::Matte), (0, Finish::Glossy)]),
        ];

        let (outcome, statistics) = solve(3, &clauses);

        assert_eq!(expect_found(outcome).finishes(), &[Finish::Glossy; 3]);
        assert_eq!(statistics.num_branchings.get(), 1);
        assert_eq!(statistics.num_pruned_nodes.get(), 1);
    }

    #[test]
    fn forced_matte_propagates_around_a_cycle() {
        let clauses = vec![
            clause(3, &[(0, Finish::Matte), (1, Finish::Glossy)]),
            clause(3, &[(1, Finish::Matte), (2, Finish::Glossy)]),
            clause(3, &[(2, Finish::Matte), (0, Finish::Glossy)]),
            clause(3, &[(1, Finish::Matte)]),
        ];

        let (outcome, statistics) = solve(3, &clauses);

        assert_eq!(expect_found(outcome).finishes(), &[Finish::Matte; 3]);
        assert_eq!(statistics.num_branchings.get(), 0);
    }

    #[test]
    fn empty_clause_is_unsatisfiable() {
        let (outcome, _) = solve(2, &[Clause::from_entries(vec![None, None])]);

        assert_eq!(outcome, SearchOutcome::Unsatisfiable);
    }

    #[test]
    fn no_clauses_gives_all_glossy() {
        let (outcome, _) = solve(3, &[]);

        assert_eq!(expect_found(outcome).finishes(), &[Finish::Glossy; 3]);
    }

    #[test]
    fn parallel_search_finds_the_same_optimum() {
        let clauses = vec![
            clause(4, &[(0, Finish::Matte), (1, Finish::Glossy)]),
            clause(4, &[(1, Finish::Matte), (2, Finish::Glossy)]),
            clause(4, &[(2, Finish::Matte), (3, Finish::Glossy)]),
            clause(4, &[(3, Finish::Matte), (0, Finish::Glossy)]),
            clause(4, &[(0, Finish::Glossy), (2, Finish::Glossy)]),
        ];
        let (sequential, _) = solve(4, &clauses);

        let statistics = SearchStatistics::default();
        let parallel = BranchAndBound::new(&MostOccurrences, &statistics, true).solve(4, &clauses);

        assert_eq!(
            expect_found(sequential).matte_weight(),
            expect_found(parallel).matte_weight()
        );
    }

    #[test]
    fn better_of_keeps_the_cheaper_child() {
        let glossy = Solution::new(vec![Finish::Glossy, Finish::Matte]);
        let matte = Solution::new(vec![Finish::Matte, Finish::Matte]);
        let tied = Solution::new(vec![Finish::Matte, Finish::Glossy]);

        assert_eq!(
            SearchOutcome::better_of(
                SearchOutcome::Found(glossy.clone()),
                SearchOutcome::Found(matte.clone())
            ),
            SearchOutcome::Found(glossy.clone())
        );
        assert_eq!(
            SearchOutcome::better_of(
                SearchOutcome::Found(glossy.clone()),
                SearchOutcome::Found(tied)
            ),
            SearchOutcome::Found(glossy.clone())
        );
        assert_eq!(
            SearchOutcome::better_of(SearchOutcome::Unsatisfiable, SearchOutcome::Found(matte.clone())),
            SearchOutcome::Found(matte)
        );
        assert_eq!(
            SearchOutcome::better_of(SearchOutcome::Unsatisfiable, SearchOutcome::Unsatisfiable),
            SearchOutcome::Unsatisfiable
        );
    }
}
