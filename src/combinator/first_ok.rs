//! First-ok aggregation: the first success wins.
//!
//! # Semantics
//!
//! ```text
//! any([r1, r2, ..., rn]):
//!   errors ← []
//!   for r in [r1, r2, ..., rn]:
//!     if r is Ok:
//!       return r
//!     errors.push(r.error)
//!   return Err(errors)
//! ```
//!
//! # Distinction from `all`
//!
//! - **all**: every outcome must succeed, first error wins
//! - **any**: one outcome must succeed, errors cause fallback

use crate::types::Outcome;

/// Returns the first `Ok` outcome, or every error if none succeeded.
///
/// The input is consumed in a single pass and nothing after the first `Ok`
/// is pulled from the iterator. An empty input is `Err(vec![])`.
///
/// # Example
/// ```
/// use eventual::combinator::any;
/// use eventual::Outcome;
///
/// // Second operation succeeds
/// let outcomes: Vec<Outcome<i32, &str>> = vec![
///     Outcome::Err("first failed"),
///     Outcome::Ok(42),
///     Outcome::Err("never reached"),
/// ];
/// assert_eq!(any(outcomes), Outcome::Ok(42));
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![Outcome::Err("a"), Outcome::Err("b")];
/// assert_eq!(any(outcomes), Outcome::Err(vec!["a", "b"]));
/// ```
pub fn any<T, E, I>(outcomes: I) -> Outcome<T, Vec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut errors = Vec::new();

    for outcome in outcomes {
        match outcome {
            // First success - return immediately
            Outcome::Ok(v) => return Outcome::Ok(v),
            Outcome::Err(e) => errors.push(e),
        }
    }

    Outcome::Err(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn any_returns_first_ok() {
        init_test("any_returns_first_ok");
        let outcomes: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(1), Outcome::Err("a")];
        let result = any(outcomes);
        crate::assert_with_log!(
            result == Outcome::Ok(1),
            "first ok",
            Outcome::<i32, Vec<&str>>::Ok(1),
            result
        );
        crate::test_complete!("any_returns_first_ok");
    }

    #[test]
    fn any_collects_all_errors_in_order() {
        init_test("any_collects_all_errors_in_order");
        let outcomes: Vec<Outcome<i32, &str>> = vec![Outcome::Err("a"), Outcome::Err("b")];
        assert_eq!(any(outcomes), Outcome::Err(vec!["a", "b"]));
        crate::test_complete!("any_collects_all_errors_in_order");
    }

    #[test]
    fn any_empty_is_err_empty() {
        init_test("any_empty_is_err_empty");
        let outcomes: Vec<Outcome<i32, &str>> = Vec::new();
        assert_eq!(any(outcomes), Outcome::Err(Vec::new()));
        crate::test_complete!("any_empty_is_err_empty");
    }

    #[test]
    fn any_stops_pulling_after_ok() {
        init_test("any_stops_pulling_after_ok");
        let mut pulled = 0;
        let outcomes = ["x", "y", "7", "z", "9"].into_iter().map(|s| {
            pulled += 1;
            Outcome::from(s.parse::<u8>())
        });
        assert_eq!(any(outcomes), Outcome::Ok(7));
        crate::assert_with_log!(pulled == 3, "items pulled", 3, pulled);
        crate::test_complete!("any_stops_pulling_after_ok");
    }
}
