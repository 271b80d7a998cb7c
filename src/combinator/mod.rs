//! Aggregators over sequences of outcomes.
//!
//! - [`join`]: [`all`], every outcome must succeed
//! - [`first_ok`]: [`any`], the first success wins
//!
//! Both are single-pass and never retry.

pub mod first_ok;
pub mod join;

pub use first_ok::any;
pub use join::all;
