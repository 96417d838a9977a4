use super::PositionSelector;
use crate::basic_types::Assignment;
use crate::basic_types::Clause;

/// A [`PositionSelector`] which selects the unset position that occurs in the largest number of
/// active clauses. Ties are broken in favour of the lowest index.
#[derive(Debug, Default, Clone, Copy)]
pub struct MostOccurrences;

impl PositionSelector for MostOccurrences {
    fn select_position(&self, assignment: &Assignment, active: &[Clause]) -> Option<usize> {
        let mut num_occurrences = vec![0_usize; assignment.width()];
        for clause in active {
            for (position, _) in clause.literals() {
                num_occurrences[position] += 1;
            }
        }

        let mut selected: Option<(usize, usize)> = None;
        for position in assignment.unset_positions() {
            let occurrences = num_occurrences[position];
            if selected.is_none_or(|(_, best)| occurrences > best) {
                selected = Some((position, occurrences));
            }
        }

        selected.map(|(position, _)| position)
    }
}
