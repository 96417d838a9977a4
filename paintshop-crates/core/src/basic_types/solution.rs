use super::Clause;
use super::Finish;

/// A complete assignment: every position has a finish.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    finishes: Box<[Finish]>,
}

impl Solution {
    pub fn new(finishes: Vec<Finish>) -> Self {
        Self {
            finishes: finishes.into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.finishes.len()
    }

    pub fn get(&self, position: usize) -> Finish {
        self.finishes[position]
    }

    pub fn finishes(&self) -> &[Finish] {
        &self.finishes
    }

    /// The objective value of the solution.
    pub fn matte_weight(&self) -> usize {
        self.finishes
            .iter()
            .filter(|&&finish| finish == Finish::Matte)
            .count()
    }

    pub fn satisfies(&self, clause: &Clause) -> bool {
        clause
            .literals()
            .any(|(position, finish)| self.finishes[position] == finish)
    }
}
