//! Error types raised by forced extraction.
//!
//! Combinators never fail on their own account; they only redirect data.
//! Failing is reserved for the forced extractions (`unwrap`, `expect`,
//! `unwrap_err`, `expect_err` and their [`EventualResult`] analogues), and
//! those always fail with one of two kinds:
//!
//! - [`UnwrapError`]: message-less extraction on the wrong variant
//! - [`ExpectError`]: extraction with a caller-supplied message
//!
//! Both carry the value found in the "wrong" variant as their cause. When the
//! cause type is itself a [`std::error::Error`], the error implements `Error`
//! and [`source`](std::error::Error::source) links to the cause. Any other
//! cause is carried opaquely and stays reachable through `cause()`.
//!
//! # Raising
//!
//! "Raising" means panicking with a [`PanicPayload`] that keeps the typed
//! error (`std::panic::panic_any`). The payload's message is the error's
//! `Display` text, so [`run`](crate::run) and `EventualResult::from_fn` report
//! it as-is. A caller that needs the error itself can `catch_unwind` and call
//! `PanicPayload::from_panic(payload).downcast::<UnwrapError<E>>()`, or use the
//! non-panicking `try_unwrap`/`try_expect` variants, which return the same
//! error value.
//!
//! The default panic hook only prints `&str`/`String` payloads, so an uncaught
//! raise shows up there as `Box<dyn Any>`. The message is in the `debug!`
//! event logged just before the panic.
//!
//! [`EventualResult`]: crate::EventualResult

use core::fmt;
use std::any::Any;
use std::borrow::Cow;
use std::convert::Infallible;

use crate::tracing_compat::debug;
use crate::types::PanicPayload;

/// Forced, message-less extraction on the wrong variant.
///
/// `C` is the type of the value found instead of the expected one. It
/// defaults to [`Infallible`] for extractions that have nothing to carry
/// (`Maybe::None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError<C = Infallible> {
    message: Cow<'static, str>,
    cause: Option<C>,
}

impl UnwrapError {
    /// Creates an unwrap error with no cause.
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }
}

impl<C> UnwrapError<C> {
    /// Creates an unwrap error carrying the value found instead of the expected one.
    #[must_use]
    pub fn with_cause(message: impl Into<Cow<'static, str>>, cause: C) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&C> {
        self.cause.as_ref()
    }

    /// Consumes the error, returning the cause.
    #[must_use]
    pub fn into_cause(self) -> Option<C> {
        self.cause
    }
}

impl<C> fmt::Display for UnwrapError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<C: std::error::Error + 'static> std::error::Error for UnwrapError<C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Forced extraction with a caller-supplied message on the wrong variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectError<C = Infallible> {
    message: Cow<'static, str>,
    cause: Option<C>,
}

impl ExpectError {
    /// Creates an expect error with no cause.
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }
}

impl<C> ExpectError<C> {
    /// Creates an expect error carrying the value found instead of the expected one.
    #[must_use]
    pub fn with_cause(message: impl Into<Cow<'static, str>>, cause: C) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Returns the caller-supplied message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&C> {
        self.cause.as_ref()
    }

    /// Consumes the error, returning the cause.
    #[must_use]
    pub fn into_cause(self) -> Option<C> {
        self.cause
    }
}

impl<C> fmt::Display for ExpectError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<C: std::error::Error + 'static> std::error::Error for ExpectError<C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Raises `error` as a typed panic payload.
#[track_caller]
pub(crate) fn raise<P>(error: P) -> !
where
    P: fmt::Display + Any + Send,
{
    debug!(error = %error, "forced extraction failed");
    std::panic::panic_any(PanicPayload::raised(error))
}
