//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, LocatedError> {
//!     from_optional((id == 1).then_some("admin"), || located!("unknown id {}", id))
//! }
//!
//! assert_eq!(lookup(1).recover(|| "guest"), "admin");
//! assert_eq!(lookup(2).recover(|| "guest"), "guest");
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`located!`]
//! - **Types**: [`Outcome`], [`LocatedError`], [`NoError`]
//! - **Traits**: [`OutcomeLike`] (and `OutcomeTraceExt` with the `tracing` feature)
//! - **Functions**: [`both`], [`from_optional`], [`attempt`], [`materialize`]

// Macros
pub use crate::located;

// Core types
pub use crate::types::{LocatedError, NoError, Outcome};

// Traits
pub use crate::traits::{both, OutcomeLike};
#[cfg(feature = "tracing")]
pub use crate::traits::OutcomeTraceExt;

// Constructors
pub use crate::convert::{attempt, from_optional, materialize};
