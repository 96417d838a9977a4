use super::PositionSelector;
use crate::basic_types::Assignment;
use crate::basic_types::Clause;

/// A [`PositionSelector`] which selects the unset position with the lowest index.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrder;

impl PositionSelector for InputOrder {
    fn select_position(&self, assignment: &Assignment, _active: &[Clause]) -> Option<usize> {
        assignment.unset_positions().next()
    }
}
