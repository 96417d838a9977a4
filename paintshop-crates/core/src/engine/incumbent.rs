use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::basic_types::Solution;

const NO_BOUND: usize = usize::MAX;

/// The best solution found so far during one search. It lives exactly as long as one call to
/// [`Solver::solve`](crate::Solver::solve).
///
/// The matte-weight of the best solution is kept in an atomic so that pruning checks do not take
/// the lock. Reading a stale bound only means a node is not pruned when it could have been.
/// Replacements are serialised by the lock and only ever lower the bound.
#[derive(Debug)]
pub(crate) struct Incumbent {
    bound: AtomicUsize,
    best: Mutex<Option<Solution>>,
}

impl Incumbent {
    pub(crate) fn empty() -> Incumbent {
        Incumbent {
            bound: AtomicUsize::new(NO_BOUND),
            best: Mutex::new(None),
        }
    }

    /// The matte-weight of the best solution, if there is one.
    pub(crate) fn bound(&self) -> Option<usize> {
        match self.bound.load(Ordering::Acquire) {
            NO_BOUND => None,
            bound => Some(bound),
        }
    }

    /// Whether a node with `matte_weight` Matte positions can still lead to a better solution.
    pub(crate) fn can_be_improved_by(&self, matte_weight: usize) -> bool {
        self.bound().is_none_or(|bound| matte_weight < bound)
    }

    /// Replaces the incumbent with `solution` if it is strictly better. Returns whether the
    /// incumbent was replaced.
    pub(crate) fn offer(&self, solution: &Solution) -> bool {
        let matte_weight = solution.matte_weight();
        let mut best = self.best.lock().unwrap_or_else(PoisonError::into_inner);

        let improves = best
            .as_ref()
            .is_none_or(|current| matte_weight < current.matte_weight());
        if improves {
            *best = Some(solution.clone());
            self.bound.store(matte_weight, Ordering::Release);
        }

        improves
    }

    pub(crate) fn into_best(self) -> Option<Solution> {
        self.best
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
