use crate::basic_types::Assignment;
use crate::basic_types::Clause;
use crate::containers::HashSet;

/// The outcome of reducing the active clauses of a node against its assignment.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ClauseReduction {
    /// The clauses which are not yet satisfied, reduced and deduplicated, in order of first
    /// occurrence. Every one of them has at least one specified position.
    Active(Vec<Clause>),
    /// Some clause has no specified position left and is not satisfied.
    Falsified,
}

/// Derives the active clauses of a node from the active clauses of its parent. The parent's
/// clauses are left untouched.
pub(crate) fn reduce_active_clauses(clauses: &[Clause], assignment: &Assignment) -> ClauseReduction {
    let mut seen: HashSet<Clause> = HashSet::default();
    let mut active = Vec::with_capacity(clauses.len());

    for clause in clauses {
        if clause.is_satisfied_by(assignment) {
            continue;
        }

        let reduced = clause.reduce(assignment);
        if reduced.weight() == 0 {
            return ClauseReduction::Falsified;
        }

        if seen.insert(reduced.clone()) {
            active.push(reduced);
        }
    }

    ClauseReduction::Active(active)
}
