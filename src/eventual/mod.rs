//! A future that always settles to an [`Outcome`].
//!
//! An [`EventualResult`] is a cross between a future and an [`Outcome`].
//! Awaiting it never panics on its own account: it yields `Ok` or `Err`.
//! The same combinators available on `Outcome` can be applied before the
//! wrapped future has settled, without knowing up front whether it will
//! succeed.
//!
//! # Settlement
//!
//! The wrapped future may produce a plain value, an `Outcome`, or fail.
//! Each case is classified once by [`Settlement`] and normalized:
//!
//! ```text
//! plain value v      → Ok(v)
//! Outcome::Ok(v)     → Ok(v)      (flattened)
//! Outcome::Err(e)    → Err(e)     (flattened)
//! Result::Err(e)     → Err(e)     (rejection)
//! panic              → Err(E::from(PanicPayload))   (catching constructors only)
//! ```
//!
//! # Terminal accessors
//!
//! - Never raise: `.await`, [`into_result`](EventualResult::into_result),
//!   [`unwrap_or`](EventualResult::unwrap_or), [`map_or`](EventualResult::map_or),
//!   [`map_or_else`](EventualResult::map_or_else) and their `_async` forms,
//!   [`ok`](EventualResult::ok), [`err`](EventualResult::err)
//! - May raise: [`unwrap`](EventualResult::unwrap), [`expect`](EventualResult::expect),
//!   [`unwrap_err`](EventualResult::unwrap_err)
//!
//! # Ordering
//!
//! Stages built with `map`/`and_then`/`map_err` run strictly after the stage
//! producing their input has settled. Like every Rust future, nothing runs
//! until the value is polled, and dropping it abandons the work.

mod catch_unwind;
pub mod settlement;

use core::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use self::catch_unwind::CatchUnwind;
use crate::error::{raise, ExpectError, UnwrapError};
use crate::tracing_compat::{trace, warn};
use crate::types::{Maybe, Outcome, PanicPayload};

pub use settlement::{IntoSettlement, Settlement};

type BoxOutcomeFuture<T, E> = Pin<Box<dyn Future<Output = Outcome<T, E>> + Send + 'static>>;

/// An asynchronous [`Outcome`].
///
/// Every combinator consumes the receiver and returns a new value; the
/// wrapped future is fixed at construction.
#[must_use = "an `EventualResult` does nothing unless awaited"]
pub struct EventualResult<T, E> {
    future: BoxOutcomeFuture<T, E>,
}

impl<T, E> EventualResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps an in-flight future producing an [`Outcome`], a `Result`, or a
    /// [`Settlement`].
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future + Send + 'static,
        Fut::Output: IntoSettlement<T, E>,
    {
        Self::from_outcome_future(async move { future.await.into_settlement().normalize() })
    }

    /// Wraps an in-flight future producing a plain value, which becomes `Ok`.
    pub fn from_value_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::from_outcome_future(async move {
            Settlement::<T, E>::Value(future.await).normalize()
        })
    }

    /// Calls `producer` now and wraps the future it returns.
    ///
    /// Construction never panics: a panic raised by `producer`, or raised
    /// later while polling its future, becomes an eventual `Err`.
    pub fn from_fn<P, Fut>(producer: P) -> Self
    where
        P: FnOnce() -> Fut,
        Fut: Future + Send + 'static,
        Fut::Output: IntoSettlement<T, E>,
        E: From<PanicPayload>,
    {
        match std::panic::catch_unwind(AssertUnwindSafe(producer)) {
            Ok(future) => Self::new(future).catch_unwind(),
            Err(payload) => {
                let payload = PanicPayload::from_panic(payload);
                warn!(panic = %payload, "producer panicked before returning a future");
                Self::rejected(E::from(payload))
            }
        }
    }

    /// An already-settled eventual result. No asynchronous work is performed.
    pub fn resolved(outcome: Outcome<T, E>) -> Self {
        Self::from_outcome_future(std::future::ready(outcome))
    }

    /// An already-failed eventual result.
    pub fn rejected(error: E) -> Self {
        Self::resolved(Outcome::Err(error))
    }

    fn from_outcome_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            future: Box::pin(future),
        }
    }

    /// Converts a panic while polling the wrapped future into an eventual `Err`.
    pub fn catch_unwind(self) -> Self
    where
        E: From<PanicPayload>,
    {
        let future = self.future;
        Self::from_outcome_future(async move {
            match CatchUnwind::new(future).await {
                Ok(outcome) => outcome,
                Err(payload) => {
                    let payload = PanicPayload::from_panic(payload);
                    warn!(panic = %payload, "wrapped future panicked");
                    Outcome::Err(E::from(payload))
                }
            }
        })
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Maps the eventual success value. `op` never runs on failure.
    pub fn map<U, F>(self, op: F) -> EventualResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        EventualResult::from_outcome_future(async move { self.await.map(op) })
    }

    /// Maps the eventual success value with an asynchronous operation.
    pub fn map_async<U, F, Fut>(self, op: F) -> EventualResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        EventualResult::from_outcome_future(async move {
            match self.await {
                Outcome::Ok(v) => Outcome::Ok(op(v).await),
                Outcome::Err(e) => Outcome::Err(e),
            }
        })
    }

    /// Maps the eventual error. `op` never runs on success.
    pub fn map_err<F2, G>(self, op: G) -> EventualResult<T, F2>
    where
        F2: Send + 'static,
        G: FnOnce(E) -> F2 + Send + 'static,
    {
        EventualResult::from_outcome_future(async move { self.await.map_err(op) })
    }

    /// Maps the eventual error with an asynchronous operation.
    pub fn map_err_async<F2, G, Fut>(self, op: G) -> EventualResult<T, F2>
    where
        F2: Send + 'static,
        G: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = F2> + Send + 'static,
    {
        EventualResult::from_outcome_future(async move {
            match self.await {
                Outcome::Ok(v) => Outcome::Ok(v),
                Outcome::Err(e) => Outcome::Err(op(e).await),
            }
        })
    }

    /// Chains an operation that may fail, once the receiver has succeeded.
    pub fn and_then<U, F>(self, op: F) -> EventualResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Outcome<U, E> + Send + 'static,
    {
        EventualResult::from_outcome_future(async move { self.await.and_then(op) })
    }

    /// Chains an asynchronous operation that may fail.
    ///
    /// `op` may return another `EventualResult`, or any future producing an
    /// `Outcome` or a `Result`; that output decides the sign of the result.
    /// `op` runs only after the receiver settled to success.
    pub fn and_then_async<U, F, Fut>(self, op: F) -> EventualResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: IntoSettlement<U, E>,
    {
        EventualResult::from_outcome_future(async move {
            match self.await {
                Outcome::Ok(v) => op(v).await.into_settlement().normalize(),
                Outcome::Err(e) => Outcome::Err(e),
            }
        })
    }

    /// Keeps an eventual success, otherwise falls back to `other`.
    pub fn or<F2>(self, other: EventualResult<T, F2>) -> EventualResult<T, F2>
    where
        F2: Send + 'static,
    {
        EventualResult::from_outcome_future(async move {
            match self.await {
                Outcome::Ok(v) => Outcome::Ok(v),
                Outcome::Err(_) => {
                    trace!("receiver failed, settling through fallback");
                    other.await
                }
            }
        })
    }

    /// Keeps an eventual success, otherwise falls back to the result of `other`.
    ///
    /// `other` is called only on failure, with the error.
    pub fn or_else<F2, O>(self, other: O) -> EventualResult<T, F2>
    where
        F2: Send + 'static,
        O: FnOnce(E) -> EventualResult<T, F2> + Send + 'static,
    {
        EventualResult::from_outcome_future(async move {
            match self.await {
                Outcome::Ok(v) => Outcome::Ok(v),
                Outcome::Err(e) => {
                    trace!("receiver failed, settling through fallback");
                    other(e).await
                }
            }
        })
    }

    /// Observes the settled outcome without changing it.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&Outcome<T, E>) + Send + 'static,
    {
        Self::from_outcome_future(async move {
            let outcome = self.await;
            f(&outcome);
            outcome
        })
    }

    /// Observes an eventual failure without changing it.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        self.inspect(move |outcome| {
            if let Outcome::Err(e) = outcome {
                f(e);
            }
        })
    }

    // =========================================================================
    // Terminal accessors
    // =========================================================================

    /// Settles, then maps the success value or returns `fallback`. Never raises.
    pub async fn map_or<U, F>(self, fallback: U, op: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.await.map_or(fallback, op)
    }

    /// Settles, then maps the success value or computes a fallback. Never raises.
    pub async fn map_or_else<U, D, F>(self, fallback: D, op: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.await.map_or_else(fallback, op)
    }

    /// Like [`map_or`](Self::map_or), with an asynchronous `op`.
    pub async fn map_or_async<U, F, Fut>(self, fallback: U, op: F) -> U
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.await {
            Outcome::Ok(v) => op(v).await,
            Outcome::Err(_) => fallback,
        }
    }

    /// Like [`map_or_else`](Self::map_or_else), with an asynchronous fallback
    /// and `op`. Only one of the two futures is created.
    pub async fn map_or_else_async<U, D, DFut, F, Fut>(self, fallback: D, op: F) -> U
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = U>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.await {
            Outcome::Ok(v) => op(v).await,
            Outcome::Err(_) => fallback().await,
        }
    }

    /// Resolves to the success value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] whose cause is the failure, if the receiver
    /// eventually fails.
    pub async fn unwrap(self) -> T {
        match self.try_unwrap().await {
            Ok(v) => v,
            Err(e) => raise(e),
        }
    }

    /// Resolves to the success value, or the [`UnwrapError`] `unwrap` would raise.
    pub async fn try_unwrap(self) -> Result<T, UnwrapError<E>> {
        self.await.try_unwrap()
    }

    /// Resolves to the success value, or `fallback` on failure. Never raises.
    pub async fn unwrap_or(self, fallback: T) -> T {
        self.await.unwrap_or(fallback)
    }

    /// Resolves to the success value, or computes one on failure. Never raises.
    pub async fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.unwrap_or_else(fallback)
    }

    /// Resolves to the failure value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] whose cause is the success value, if the
    /// receiver eventually succeeds.
    pub async fn unwrap_err(self) -> E {
        match self.await {
            Outcome::Ok(v) => raise(UnwrapError::with_cause(
                "Cannot unwrap resolving `EventualResult` to `Err`",
                v,
            )),
            Outcome::Err(e) => e,
        }
    }

    /// Resolves to the success value.
    ///
    /// # Panics
    ///
    /// Raises an [`ExpectError`] with `message` whose cause is the failure,
    /// if the receiver eventually fails.
    pub fn expect(self, message: &str) -> impl Future<Output = T> + Send + 'static {
        let message = message.to_owned();
        async move {
            match self.await {
                Outcome::Ok(v) => v,
                Outcome::Err(e) => raise(ExpectError::with_cause(message, e)),
            }
        }
    }

    /// Settles, then converts to a [`Maybe`] of the success value.
    pub async fn ok(self) -> Maybe<T> {
        self.await.ok()
    }

    /// Settles, then converts to a [`Maybe`] of the failure value.
    pub async fn err(self) -> Maybe<E> {
        self.await.err()
    }

    /// Settles into a standard `Result`. Never raises.
    pub async fn into_result(self) -> Result<T, E> {
        self.await.into_result()
    }
}

impl<T, E> Future for EventualResult<T, E> {
    type Output = Outcome<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.as_mut().poll(cx)
    }
}

impl<T, E> From<Outcome<T, E>> for EventualResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::resolved(outcome)
    }
}

impl<T, E> fmt::Debug for EventualResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventualResult").finish_non_exhaustive()
    }
}
