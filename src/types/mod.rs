//! Outcome and error types.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{located, Outcome, OutcomeLike};
//!
//! let o: Outcome<u32, outcome_rail::LocatedError> = Outcome::err(located!("no such user"));
//! let rendered = o.map(|id| id + 1).to_string();
//! assert!(rendered.starts_with("Err(no such user (in "));
//! assert!(rendered.ends_with(&format!("{}:{})", file!(), line!() - 3)));
//! ```
pub mod alloc_type;
pub mod located_error;
pub mod outcome;

pub use located_error::*;
pub use outcome::*;
