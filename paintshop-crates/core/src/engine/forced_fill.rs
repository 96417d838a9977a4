use crate::basic_types::Assignment;
use crate::basic_types::Clause;
use crate::basic_types::Finish;

/// Fixes every unset position which no active clause wants matte to [`Finish::Glossy`].
///
/// Glossy costs nothing, and a clause that mentions such a position either asks for glossy there
/// or does not constrain it, so fixing it can neither violate a clause nor raise the optimum.
pub(crate) fn default_fill(active: &[Clause], assignment: &Assignment) -> Assignment {
    let mut matte_demanded = vec![false; assignment.width()];
    for clause in active {
        for (position, finish) in clause.literals() {
            if finish == Finish::Matte {
                matte_demanded[position] = true;
            }
        }
    }

    Assignment::from_values(
        assignment
            .values()
            .iter()
            .zip(matte_demanded)
            .map(|(&value, demanded)| match value {
                None if !demanded => Some(Finish::Glossy),
                _ => value,
            })
            .collect(),
    )
}
