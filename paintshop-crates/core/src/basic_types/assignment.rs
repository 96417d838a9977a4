use super::Finish;
use super::Solution;
use crate::paintshop_assert_simple;

/// A (partial) assignment of finishes to positions; a node of the search tree.
///
/// Positions are never unfixed. Extending an assignment with [`Assignment::with`] produces a new
/// assignment, which keeps sibling nodes independent from one another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Box<[Option<Finish>]>,
}

impl Assignment {
    /// The root of the search: every position is unset.
    pub fn unassigned(width: usize) -> Assignment {
        Assignment {
            values: vec![None; width].into_boxed_slice(),
        }
    }

    pub fn from_values(values: Vec<Option<Finish>>) -> Assignment {
        Assignment {
            values: values.into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, position: usize) -> Option<Finish> {
        self.values[position]
    }

    pub fn values(&self) -> &[Option<Finish>] {
        &self.values
    }

    pub fn is_fixed(&self, position: usize) -> bool {
        self.values[position].is_some()
    }

    /// Returns a copy of this assignment in which `position` is additionally fixed to `finish`.
    pub fn with(&self, position: usize, finish: Finish) -> Assignment {
        paintshop_assert_simple!(
            !self.is_fixed(position),
            "position {position} is already fixed"
        );

        let mut values = self.values.clone();
        values[position] = Some(finish);

        Assignment { values }
    }

    /// The number of positions fixed to [`Finish::Matte`].
    pub fn matte_weight(&self) -> usize {
        self.values
            .iter()
            .filter(|&&value| value == Some(Finish::Matte))
            .count()
    }

    pub fn unset_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(position, _)| position)
    }

    pub fn num_unset(&self) -> usize {
        self.unset_positions().count()
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Turns the assignment into a [`Solution`], giving every unset position the free finish.
    pub fn complete_with_glossy(&self) -> Solution {
        Solution::new(
            self.values
                .iter()
                .map(|value| value.unwrap_or(Finish::Glossy))
                .collect(),
        )
    }
}
