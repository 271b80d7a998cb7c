//! Join aggregation: every outcome must succeed.
//!
//! # Semantics
//!
//! ```text
//! all([r1, r2, ..., rn]):
//!   values ← []
//!   for r in [r1, r2, ..., rn]:
//!     if r is Err:
//!       return r
//!     values.push(r.value)
//!   return Ok(values)
//! ```
//!
//! The input is consumed in a single pass. The first `Err` ends the pass, so
//! later items are never pulled from the iterator.

use crate::types::Outcome;

/// Combines outcomes into one outcome holding every success value.
///
/// Returns the first `Err` encountered. If there is none, returns `Ok` with
/// the success values in input order. An empty input is `Ok(vec![])`.
///
/// # Example
/// ```
/// use eventual::combinator::all;
/// use eventual::Outcome;
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(1), Outcome::Ok(2)];
/// assert_eq!(all(outcomes), Outcome::Ok(vec![1, 2]));
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(1), Outcome::Err("x")];
/// assert_eq!(all(outcomes), Outcome::Err("x"));
/// ```
pub fn all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let outcomes = outcomes.into_iter();
    let mut values = Vec::with_capacity(outcomes.size_hint().0);

    for outcome in outcomes {
        match outcome {
            Outcome::Ok(v) => values.push(v),
            Outcome::Err(e) => return Outcome::Err(e),
        }
    }

    Outcome::Ok(values)
}
