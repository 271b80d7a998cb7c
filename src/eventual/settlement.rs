//! How a wrapped future finished, before normalization.
//!
//! A future handed to an [`EventualResult`] can finish in three ways, and all
//! three are classified here, once, at the continuation boundary:
//!
//! | settlement           | normalized outcome |
//! |----------------------|--------------------|
//! | `Value(v)`           | `Ok(v)`            |
//! | `Resolved(Ok(v))`    | `Ok(v)`            |
//! | `Resolved(Err(e))`   | `Err(e)`           |
//! | `Rejected(e)`        | `Err(e)`           |
//!
//! After normalization the rejection path and the `Err` path are
//! indistinguishable.
//!
//! [`EventualResult`]: super::EventualResult

use crate::types::Outcome;

/// The three-way classification of a settled future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement<T, E> {
    /// The future produced a plain value.
    Value(T),
    /// The future produced an [`Outcome`], which is flattened.
    Resolved(Outcome<T, E>),
    /// The future failed with an error.
    Rejected(E),
}

impl<T, E> Settlement<T, E> {
    /// Collapses the settlement into an [`Outcome`].
    pub fn normalize(self) -> Outcome<T, E> {
        match self {
            Self::Value(v) => Outcome::Ok(v),
            Self::Resolved(outcome) => outcome,
            Self::Rejected(e) => Outcome::Err(e),
        }
    }
}

/// Output types a wrapped future may produce.
///
/// Implemented for [`Outcome`] (flattened), for `Result` (a future that
/// fails by producing `Err` is a rejection) and for [`Settlement`] itself.
/// Futures producing a plain value are wrapped with
/// [`EventualResult::from_value_future`](super::EventualResult::from_value_future).
pub trait IntoSettlement<T, E> {
    /// Classifies this output.
    fn into_settlement(self) -> Settlement<T, E>;
}

impl<T, E> IntoSettlement<T, E> for Settlement<T, E> {
    fn into_settlement(self) -> Settlement<T, E> {
        self
    }
}

impl<T, E> IntoSettlement<T, E> for Outcome<T, E> {
    fn into_settlement(self) -> Settlement<T, E> {
        Settlement::Resolved(self)
    }
}

impl<T, E> IntoSettlement<T, E> for Result<T, E> {
    fn into_settlement(self) -> Settlement<T, E> {
        match self {
            Ok(v) => Settlement::Value(v),
            Err(e) => Settlement::Rejected(e),
        }
    }
}
