//! Core types.
//!
//! - [`maybe`]: Two-valued presence type (`Some`/`None`)
//! - [`outcome`]: Two-valued outcome type (`Ok`/`Err`) and the payload of a caught panic

pub mod maybe;
pub mod outcome;

pub use maybe::Maybe;
pub use outcome::{Outcome, PanicPayload};
