//! Two-valued outcome type.
//!
//! The outcome type represents the result of an operation that may fail:
//!
//! - `Ok(T)`: Success with value
//! - `Err(E)`: Failure with error
//!
//! The error is never interpreted; it may be any value, including a
//! [`PanicPayload`] captured from a raised panic.
//!
//! Combinators only redirect data. Failing is reserved for the forced
//! extractions (`unwrap`, `expect`, `unwrap_err`, `expect_err`), which raise
//! the typed errors from [`crate::error`] with the wrong-variant value as cause.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::any::Any;
use std::sync::{Mutex, PoisonError};

use super::maybe::Maybe;
use crate::error::{raise, ExpectError, UnwrapError};
use crate::eventual::EventualResult;

/// Payload from a caught panic.
///
/// This wraps the panic value so a raised panic can travel as an ordinary
/// error value. A panic raised by a forced extraction keeps the typed
/// [`UnwrapError`]/[`ExpectError`] it was raised with; [`downcast`](Self::downcast)
/// recovers it together with its cause.
///
/// Equality and hashing consider the message only.
pub struct PanicPayload {
    message: String,
    // Mutex keeps the payload `Sync` without requiring it of the raised value.
    raised: Option<Mutex<Box<dyn Any + Send>>>,
}

impl PanicPayload {
    /// Creates a new panic payload with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised: None,
        }
    }

    pub(crate) fn raised<P>(error: P) -> Self
    where
        P: fmt::Display + Any + Send,
    {
        Self {
            message: error.to_string(),
            raised: Some(Mutex::new(Box::new(error))),
        }
    }

    /// Converts the boxed value `catch_unwind` returns.
    ///
    /// A payload raised by a forced extraction is returned unchanged. `&str`
    /// and `String` panics keep their message; any other value becomes
    /// `"unknown panic"` and stays reachable through [`downcast`](Self::downcast).
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(raised) => return *raised,
            Err(other) => other,
        };
        let message = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned());
        match message {
            Some(message) => Self::new(message),
            None => Self {
                message: "unknown panic".to_string(),
                raised: Some(Mutex::new(payload)),
            },
        }
    }

    /// Returns the panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the raised value is an `X`.
    #[must_use]
    pub fn is<X: Any>(&self) -> bool {
        self.raised.as_ref().is_some_and(|raised| {
            let guard = raised.lock().unwrap_or_else(PoisonError::into_inner);
            (**guard).is::<X>()
        })
    }

    /// Recovers the raised value, such as the `UnwrapError<E>` a failed
    /// `unwrap` raised with its cause.
    ///
    /// Returns the payload unchanged if there is no raised value of type `X`.
    pub fn downcast<X: Any>(self) -> Result<X, Self> {
        let Self { message, raised } = self;
        let Some(raised) = raised else {
            return Err(Self { message, raised: None });
        };
        match raised
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .downcast::<X>()
        {
            Ok(value) => Ok(*value),
            Err(other) => Err(Self {
                message,
                raised: Some(Mutex::new(other)),
            }),
        }
    }
}

impl fmt::Debug for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicPayload")
            .field("message", &self.message)
            .field("raised", &self.raised.is_some())
            .finish()
    }
}

impl PartialEq for PanicPayload {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for PanicPayload {}

impl Hash for PanicPayload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

impl fmt::Display for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panic: {}", self.message)
    }
}

impl std::error::Error for PanicPayload {}

/// The outcome of an operation that may fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// Success with a value.
    Ok(T),
    /// Failure with an error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns true if this outcome is `Ok`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns true if this outcome is `Err`.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrows both channels.
    #[must_use]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] whose cause is the error, if this is `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Send + 'static,
    {
        match self.try_unwrap() {
            Ok(v) => v,
            Err(e) => raise(e),
        }
    }

    /// Returns the success value, or the [`UnwrapError`] `unwrap` would raise.
    pub fn try_unwrap(self) -> Result<T, UnwrapError<E>> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(UnwrapError::with_cause("Cannot unwrap `Err`", e)),
        }
    }

    /// Returns the success value or `fallback`.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => fallback,
        }
    }

    /// Returns the success value or computes one. `fallback` runs only on `Err`.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, fallback: F) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => fallback(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Raises an [`ExpectError`] with `message` whose cause is the error, if
    /// this is `Err`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: Send + 'static,
    {
        match self.try_expect(message) {
            Ok(v) => v,
            Err(e) => raise(e),
        }
    }

    /// Returns the success value, or the [`ExpectError`] `expect` would raise.
    pub fn try_expect(self, message: &str) -> Result<T, ExpectError<E>> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(ExpectError::with_cause(message.to_owned(), e)),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] whose cause is the success value, if this is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Send + 'static,
    {
        match self {
            Self::Ok(v) => raise(UnwrapError::with_cause("Cannot unwrap `Ok` to `Err`", v)),
            Self::Err(e) => e,
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Raises an [`ExpectError`] with `message` whose cause is the success
    /// value, if this is `Ok`.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: Send + 'static,
    {
        match self {
            Self::Ok(v) => raise(ExpectError::with_cause(message.to_owned(), v)),
            Self::Err(e) => e,
        }
    }

    /// Chains an operation that may itself fail. Short-circuits on `Err`.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, op: F) -> Outcome<U, E> {
        match self {
            Self::Ok(v) => op(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Maps the success value using the provided function.
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Outcome<U, E> {
        match self {
            Self::Ok(v) => Outcome::Ok(op(v)),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Maps the error value using the provided function.
    pub fn map_err<F2, G: FnOnce(E) -> F2>(self, op: G) -> Outcome<T, F2> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(op(e)),
        }
    }

    /// Maps the success value or returns `fallback`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, fallback: U, op: F) -> U {
        match self {
            Self::Ok(v) => op(v),
            Self::Err(_) => fallback,
        }
    }

    /// Maps the success value or computes a fallback.
    pub fn map_or_else<U, D, F>(self, fallback: D, op: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(v) => op(v),
            Self::Err(_) => fallback(),
        }
    }

    /// Returns `other` if this is `Ok`, otherwise this `Err`.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Returns this `Ok`, otherwise `other`.
    pub fn or<F2>(self, other: Outcome<T, F2>) -> Outcome<T, F2> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(_) => other,
        }
    }

    /// Returns this `Ok`, otherwise the outcome `other` computes from the error.
    pub fn or_else<F2, O: FnOnce(E) -> Outcome<T, F2>>(self, other: O) -> Outcome<T, F2> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => other(e),
        }
    }

    /// Converts to a [`Maybe`] of the success value, discarding the error.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(v) => Maybe::Some(v),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Converts to a [`Maybe`] of the error, discarding the success value.
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(e) => Maybe::Some(e),
        }
    }

    /// Converts this outcome to a standard `Result`.
    ///
    /// This is useful when interfacing with code that expects `Result`, or to
    /// use the `?` operator.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(e),
        }
    }

    /// Lifts this settled outcome into an [`EventualResult`].
    ///
    /// No asynchronous work is performed; the wrapped future is already ready.
    pub fn eventually(self) -> EventualResult<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        EventualResult::resolved(self)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        crate::combinator::all(iter)
    }
}
