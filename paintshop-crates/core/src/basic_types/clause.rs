use super::Assignment;
use super::ConstraintOperationError;
use super::Finish;
use crate::paintshop_assert_eq_simple;

/// The requirement of a single customer: a disjunction over `(position, finish)` literals.
///
/// The clause stores one entry per position; `None` means the customer does not care about that
/// position. A clause coming from a customer has at most one [`Finish::Matte`] entry, this is
/// checked when the clause is added to the [`Solver`](crate::Solver).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    entries: Box<[Option<Finish>]>,
}

impl Clause {
    /// Creates a clause of the given `width` from its literals. When a position is named more than
    /// once, the last literal for it wins.
    pub fn new(
        width: usize,
        literals: impl IntoIterator<Item = (usize, Finish)>,
    ) -> Result<Clause, ConstraintOperationError> {
        let mut entries = vec![None; width];

        for (position, finish) in literals {
            if position >= width {
                return Err(ConstraintOperationError::PositionOutOfRange { position, width });
            }
            entries[position] = Some(finish);
        }

        Ok(Clause {
            entries: entries.into_boxed_slice(),
        })
    }

    pub fn from_entries(entries: Vec<Option<Finish>>) -> Clause {
        Clause {
            entries: entries.into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, position: usize) -> Option<Finish> {
        self.entries[position]
    }

    pub fn entries(&self) -> &[Option<Finish>] {
        &self.entries
    }

    /// Iterates over the specified `(position, finish)` pairs in position order.
    pub fn literals(&self) -> impl Iterator<Item = (usize, Finish)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| entry.map(|finish| (position, finish)))
    }

    /// The number of specified positions.
    pub fn weight(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    /// The number of positions which require [`Finish::Matte`].
    pub fn matte_weight(&self) -> usize {
        self.entries
            .iter()
            .filter(|&&entry| entry == Some(Finish::Matte))
            .count()
    }

    pub fn requires_matte_at(&self, position: usize) -> bool {
        self.entries[position] == Some(Finish::Matte)
    }

    /// Returns the only literal of a clause of weight one.
    pub fn unit_literal(&self) -> Option<(usize, Finish)> {
        let mut literals = self.literals();
        let literal = literals.next()?;

        if literals.next().is_some() {
            None
        } else {
            Some(literal)
        }
    }

    /// A clause is satisfied as soon as one fixed position of `assignment` has the finish the
    /// clause asks for.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        paintshop_assert_eq_simple!(self.width(), assignment.width());

        self.literals()
            .any(|(position, finish)| assignment.get(position) == Some(finish))
    }

    /// Clears every entry at a position which is fixed in `assignment`. Entries are only ever
    /// cleared, so reducing twice against the same assignment changes nothing.
    pub fn reduce(&self, assignment: &Assignment) -> Clause {
        paintshop_assert_eq_simple!(self.width(), assignment.width());

        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, &entry)| {
                if assignment.is_fixed(position) {
                    None
                } else {
                    entry
                }
            })
            .collect();

        Clause { entries }
    }
}
