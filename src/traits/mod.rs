//! Core traits for outcome composition.
//!
//! - [`OutcomeLike`]: the capability behind the combinator algebra. Implementors
//!   provide construction and case analysis; everything else is derived.
//! - [`OutcomeTraceExt`]: `tracing` events for outcomes (requires the `tracing` feature)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::OutcomeLike;
//!
//! // The algebra also applies to standard results.
//! let pair = OutcomeLike::both(Ok::<i32, &str>(1), || Ok::<_, &str>("one"));
//! assert_eq!(pair.into_result(), Ok((1, "one")));
//! ```

pub mod outcome_like;
#[cfg(feature = "tracing")]
pub mod trace_ext;

pub use outcome_like::{both, OutcomeLike};
#[cfg(feature = "tracing")]
pub use trace_ext::OutcomeTraceExt;
