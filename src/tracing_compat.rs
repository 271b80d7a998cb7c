//! Tracing compatibility layer for structured logging.
//!
//! This module provides a unified interface for log events that works whether
//! or not the `tracing-integration` feature is enabled:
//!
//! - **With feature enabled**: Re-exports from the `tracing` crate.
//! - **Without feature**: No-op macros that compile to nothing.
//!
//! The crate logs sparingly: a failed forced extraction at `debug`, a captured
//! panic at `warn`, and a fallback taken by `or`/`or_else` at `trace`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use eventual::tracing_compat::{debug, warn};
//!
//! // These compile to no-ops when tracing-integration is disabled
//! debug!(error = %err, "forced extraction failed");
//! warn!(panic = %payload, "wrapped future panicked");
//! ```
//!
//! # Feature Flag
//!
//! ```toml
//! eventual = { version = "0.1", features = ["tracing-integration"] }
//! ```

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    //! No-op implementations when tracing is disabled.

    /// No-op trace-level logging macro.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug-level logging macro.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op info-level logging macro.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op warn-level logging macro.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op error-level logging macro.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    pub use crate::{debug, error, info, trace, warn};
}

#[cfg(not(feature = "tracing-integration"))]
pub use noop::*;
