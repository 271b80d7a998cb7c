//! Run a producer and capture what it raises.
//!
//! [`run`] calls a synchronous producer and wraps its return value in an
//! [`Outcome`]; [`run_async`] does the same for a producer returning a future
//! and yields an [`EventualResult`]. In both cases a panic raised by the
//! producer is captured as `Err(PanicPayload)` instead of unwinding through
//! the caller.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use crate::eventual::{EventualResult, Settlement};
use crate::tracing_compat::warn;
use crate::types::{Outcome, PanicPayload};

/// Calls `producer`, returning its value as `Ok` or its panic as `Err`.
///
/// # Example
///
/// ```
/// use eventual::{run, Outcome};
///
/// assert_eq!(run(|| 1 + 1), Outcome::Ok(2));
/// assert!(run(|| -> i32 { panic!("nope") }).is_err());
/// ```
pub fn run<T, P>(producer: P) -> Outcome<T, PanicPayload>
where
    P: FnOnce() -> T,
{
    match std::panic::catch_unwind(AssertUnwindSafe(producer)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            let payload = PanicPayload::from_panic(payload);
            warn!(panic = %payload, "producer panicked");
            Outcome::Err(payload)
        }
    }
}

/// Calls `producer` and wraps the future it returns.
///
/// The future's output is always a success value; a panic raised by the
/// producer or while polling its future becomes an eventual `Err`.
pub fn run_async<T, P, Fut>(producer: P) -> EventualResult<T, PanicPayload>
where
    T: Send + 'static,
    P: FnOnce() -> Fut,
    Fut: Future<Output = T> + Send + 'static,
{
    EventualResult::from_fn(move || {
        let future = producer();
        async move { Settlement::<T, PanicPayload>::Value(future.await) }
    })
}
