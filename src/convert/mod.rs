//! Interop constructors that build an [`Outcome`] from other representations of
//! success and failure.
//!
//! These are the boundary between code that signals failure some other way
//! (an absent optional, a `Result`-returning computation that uses `?`) and
//! code that manipulates outcomes as values.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{Outcome, OutcomeLike};
//!
//! let from_opt = from_optional(Some(3), || "missing");
//! assert_eq!(from_opt, Outcome::ok(3));
//!
//! let parsed = attempt(|| "42".parse::<i32>());
//! assert_eq!(parsed.into_result(), Ok(42));
//! ```

use crate::types::Outcome;

/// Builds an outcome from an optional value.
///
/// # Arguments
///
/// * `value` - The optional value to wrap
/// * `or_fail` - Produces the error when `value` is `None`; never called otherwise
///
/// # Returns
///
/// * `Outcome::Ok(v)` if `value` is `Some(v)`
/// * `Outcome::Err(or_fail())` if `value` is `None`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_optional;
/// use outcome_rail::Outcome;
///
/// let mut called = false;
/// let present = from_optional(Some("success"), || {
///     called = true;
///     "unused"
/// });
/// assert_eq!(present, Outcome::ok("success"));
/// assert!(!called);
///
/// let absent: Outcome<&str, _> = from_optional(None, || "missing");
/// assert_eq!(absent, Outcome::err("missing"));
/// ```
#[inline]
pub fn from_optional<V, E, F>(value: Option<V>, or_fail: F) -> Outcome<V, E>
where
    F: FnOnce() -> E,
{
    value.map_or_else(|| Outcome::Err(or_fail()), Outcome::Ok)
}

/// Runs a fallible computation and captures its result as an outcome.
///
/// The computation reports failure the usual Rust way, by returning `Err`
/// (typically through `?`). This is the single point where such code is
/// turned into a value the combinators can work with.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::attempt;
/// use outcome_rail::{Outcome, OutcomeLike};
///
/// fn parse_pair(a: &str, b: &str) -> Result<(i32, i32), std::num::ParseIntError> {
///     Ok((a.parse()?, b.parse()?))
/// }
///
/// let ok = attempt(|| parse_pair("3", "4"));
/// assert_eq!(ok.map(|(a, b)| a + b).value(), Some(7));
///
/// let failed = attempt(|| parse_pair("3", "four"));
/// assert!(failed.is_err());
/// ```
#[inline]
pub fn attempt<V, E, F>(f: F) -> Outcome<V, E>
where
    F: FnOnce() -> Result<V, E>,
{
    materialize(f())
}

/// Converts an already-evaluated `Result` into an outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::materialize;
/// use outcome_rail::Outcome;
///
/// assert_eq!(materialize(Ok::<_, &str>(1)), Outcome::ok(1));
/// assert_eq!(materialize(Err::<i32, _>("bad")), Outcome::err("bad"));
/// ```
#[inline]
pub fn materialize<V, E>(result: Result<V, E>) -> Outcome<V, E> {
    result.map_or_else(Outcome::Err, Outcome::Ok)
}
