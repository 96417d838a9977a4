use crate::basic_types::Clause;
use crate::basic_types::Finish;

/// Returns the literal of the first clause of weight one, in the order of `active`.
///
/// Such a literal is the only way left to satisfy its clause, so fixing it is not a decision.
pub(crate) fn find_unit_literal(active: &[Clause]) -> Option<(usize, Finish)> {
    active.iter().find_map(Clause::unit_literal)
}
