//! Eventual: explicit absence and failure, composed the same way whether the
//! computation is synchronous or asynchronous.
//!
//! # Overview
//!
//! Three container types replace sentinel values and thrown errors:
//!
//! - [`Maybe`]: a value that may be absent (`Some` / `None`)
//! - [`Outcome`]: an operation that succeeded or failed (`Ok` / `Err`)
//! - [`EventualResult`]: a future that always settles to an [`Outcome`]
//!
//! All three share one combinator vocabulary (`map`, `and_then`, `or`,
//! `unwrap_or`, ...). Combinators never fail on their own account; they only
//! redirect data. Failing is reserved for the forced extractions (`unwrap`,
//! `expect`, `unwrap_err`, `expect_err`), which raise a typed [`UnwrapError`]
//! or [`ExpectError`] carrying the original failure as its cause.
//!
//! # Example
//!
//! ```
//! use eventual::{EventualResult, Maybe, Outcome};
//!
//! fn parse(input: &str) -> Outcome<u16, String> {
//!     input.parse::<u16>().map_err(|e| format!("{input}: {e}")).into()
//! }
//!
//! assert_eq!(parse("8080").map(|port| port + 1), Outcome::Ok(8081));
//! assert_eq!(parse("http").ok(), Maybe::None);
//!
//! let eventual = EventualResult::<_, String>::from_value_future(async { "8080" })
//!     .and_then(parse);
//! assert_eq!(futures_lite::future::block_on(eventual), Outcome::Ok(8080));
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: [`Maybe`], [`Outcome`] and [`PanicPayload`]
//! - [`eventual`]: [`EventualResult`] and settlement classification
//! - [`combinator`]: [`all`] and [`any`] aggregators
//! - [`run`]: capture a producer's value or panic
//! - [`error`]: [`UnwrapError`] and [`ExpectError`]
//! - [`tracing_compat`]: logging facade over the optional `tracing` integration

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::future_not_send)]

pub mod combinator;
pub mod error;
pub mod eventual;
pub mod run;
pub mod tracing_compat;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use combinator::{all, any};
pub use error::{ExpectError, UnwrapError};
pub use eventual::{EventualResult, IntoSettlement, Settlement};
pub use run::{run, run_async};
pub use types::{Maybe, Outcome, PanicPayload};
