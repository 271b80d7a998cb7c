//! Two-valued presence type.
//!
//! `Maybe<T>` is either `Some(T)` or `None`. It mirrors the standard
//! `Option` but raises the crate's typed [`UnwrapError`]/[`ExpectError`] on
//! forced extraction and converts into [`Outcome`] rather than `Result`.
//!
//! `None` is a unit variant: one stateless logical value, equal to every
//! other `None` by value.

use core::fmt;

use super::outcome::Outcome;
use crate::error::{raise, ExpectError, UnwrapError};

/// A value that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    /// Returns true if this is `Some`.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns true if this is `None`.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the contained value.
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(v) => Maybe::Some(v),
            Self::None => Maybe::None,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] if this is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(v) => v,
            Err(e) => raise(e),
        }
    }

    /// Returns the contained value, or the [`UnwrapError`] `unwrap` would raise.
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Some(v) => Ok(v),
            Self::None => Err(UnwrapError::new("Cannot unwrap `None`")),
        }
    }

    /// Returns the contained value or `fallback`.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => fallback,
        }
    }

    /// Returns the contained value or computes one. `fallback` runs only on `None`.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, fallback: F) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => fallback(),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Raises an [`ExpectError`] with `message` if this is `None`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(v) => v,
            Err(e) => raise(e),
        }
    }

    /// Returns the contained value, or the [`ExpectError`] `expect` would raise.
    pub fn try_expect(self, message: &str) -> Result<T, ExpectError> {
        match self {
            Self::Some(v) => Ok(v),
            Self::None => Err(ExpectError::new(message.to_owned())),
        }
    }

    /// Chains an operation that may itself produce no value.
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, op: F) -> Maybe<U> {
        match self {
            Self::Some(v) => op(v),
            Self::None => Maybe::None,
        }
    }

    /// Maps the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Maybe<U> {
        match self {
            Self::Some(v) => Maybe::Some(op(v)),
            Self::None => Maybe::None,
        }
    }

    /// Maps the contained value or returns `fallback`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, fallback: U, op: F) -> U {
        match self {
            Self::Some(v) => op(v),
            Self::None => fallback,
        }
    }

    /// Maps the contained value or computes a fallback.
    pub fn map_or_else<U, D, F>(self, fallback: D, op: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(v) => op(v),
            Self::None => fallback(),
        }
    }

    /// Returns `other` if this is `Some`, otherwise `None`.
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// Returns self if `Some`, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns self if `Some`, otherwise the value computed by `other`.
    pub fn or_else<F: FnOnce() -> Self>(self, other: F) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other(),
        }
    }

    /// `Some(v)` becomes `Ok(v)`, `None` becomes `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Self::Some(v) => Outcome::Ok(v),
            Self::None => Outcome::Err(err),
        }
    }

    /// Like [`ok_or`](Self::ok_or), computing the error only on `None`.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Outcome<T, E> {
        match self {
            Self::Some(v) => Outcome::Ok(v),
            Self::None => Outcome::Err(err()),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(v) => Self::Some(v),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(v) => Some(v),
            Maybe::None => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(v) => write!(f, "Some({v})"),
            Self::None => f.write_str("None"),
        }
    }
}
