//! A success-or-failure type with a combinator algebra built on one primitive.
//!
//! [`Outcome`] is either `Ok(value)` or `Err(error)`. The only way to look
//! inside is case analysis ([`OutcomeLike::analyze`]); mapping, chaining,
//! error transformation, recovery and conjunction are all derived from it in
//! the [`OutcomeLike`] trait, which is also implemented for `Result`.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Combinators
//!
//! ```
//! use outcome_rail::{Outcome, OutcomeLike};
//!
//! let o1: Outcome<i32, &str> = Outcome::ok(3);
//! let o2: Outcome<i32, &str> = Outcome::ok(4);
//!
//! let sum = o1.both(|| o2).map(|(a, b)| a + b);
//! assert_eq!(sum, Outcome::ok(7));
//! ```
//!
//! ## Short-circuiting
//!
//! ```
//! use outcome_rail::{Outcome, OutcomeLike};
//!
//! let left: Outcome<i32, &str> = Outcome::err("left failed");
//! let paired = left.both(|| -> Outcome<i32, &str> { unreachable!("never evaluated") });
//! assert_eq!(paired, Outcome::err("left failed"));
//! ```
//!
//! ## Bridging fallible code
//!
//! ```
//! use outcome_rail::convert::{attempt, from_optional};
//! use outcome_rail::{Outcome, OutcomeLike};
//!
//! let port = from_optional(std::env::var("APP_PORT").ok(), || "APP_PORT unset".to_string())
//!     .flat_map(|raw| attempt(|| raw.parse::<u16>()).map_error(|e| e.to_string()))
//!     .recover(|| 8080);
//! println!("listening on {port}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Adapters for APIs that report failure through an error slot
pub mod bridge;
/// Interop constructors from optionals and fallible computations
pub mod convert;
/// Macros for location-tagged errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The capability trait and its derived combinators
pub mod traits;
/// Outcome and error types
pub mod types;

pub use convert::*;
pub use traits::*;
pub use types::{LocatedError, NoError, Outcome};
