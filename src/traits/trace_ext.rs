//! Tracing integration for outcomes.
//!
//! This module lets a pipeline of combinators report its results through the
//! `tracing` ecosystem without breaking the chain: every method returns the
//! outcome it was given.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use crate::traits::OutcomeLike;

/// Extension trait that emits `tracing` events for outcomes.
///
/// Successes are reported at `DEBUG`, failures at `WARN` with the error's
/// `Display` rendering attached as the `error` field.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeLike, OutcomeTraceExt};
///
/// let total = Outcome::<i32, &str>::ok(40)
///     .trace_outcome("load_total")
///     .map(|x| x + 2);
/// assert_eq!(total, Outcome::ok(42));
/// ```
pub trait OutcomeTraceExt: OutcomeLike {
    /// Logs the outcome of `operation` and hands it back unchanged.
    fn trace_outcome(self, operation: &str) -> Self;

    /// Logs only a failure of `operation` and hands the outcome back unchanged.
    fn trace_err(self, operation: &str) -> Self;
}

impl<O> OutcomeTraceExt for O
where
    O: OutcomeLike,
    O::Error: Display,
{
    fn trace_outcome(self, operation: &str) -> Self {
        self.analyze(
            |value| {
                tracing::debug!(operation, "operation succeeded");
                O::from_value(value)
            },
            |error| {
                tracing::warn!(operation, error = %error, "operation failed");
                O::from_error(error)
            },
        )
    }

    fn trace_err(self, operation: &str) -> Self {
        self.analyze(O::from_value, |error| {
            tracing::warn!(operation, error = %error, "operation failed");
            O::from_error(error)
        })
    }
}
