//! Adapters for APIs that report failure through an error slot.
//!
//! Some foreign or legacy interfaces return an absent value (or `false`) on
//! failure and write the reason into an out-parameter. These helpers hand the
//! callee a `&mut Option<E>` slot and turn the pair into an [`Outcome`].
//!
//! A callee that fails without filling the slot still produces an error: a
//! [`LocatedError`] pointing at the bridging call site, converted into `E`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::bridge::try_with_slot;
//! use outcome_rail::{LocatedError, OutcomeLike};
//!
//! fn legacy_lookup(key: &str, error: &mut Option<LocatedError>) -> Option<usize> {
//!     if key.is_empty() {
//!         *error = Some(LocatedError::here().with_message("empty key"));
//!         None
//!     } else {
//!         Some(key.len())
//!     }
//! }
//!
//! let found = try_with_slot(|slot| legacy_lookup("abc", slot));
//! assert_eq!(found.value(), Some(3));
//!
//! let missing = try_with_slot::<usize, LocatedError, _>(|slot| legacy_lookup("", slot));
//! assert_eq!(missing.error_value().unwrap().message(), Some("empty key"));
//! ```

use core::panic::Location;

use crate::convert::from_optional;
use crate::types::{LocatedError, Outcome};

/// Calls a value-returning API that reports failure by returning `None` and
/// writing into an error slot.
///
/// If `call` returns `None` without filling the slot, the error is a
/// [`LocatedError`] for the caller of `try_with_slot`.
#[track_caller]
pub fn try_with_slot<V, E, F>(call: F) -> Outcome<V, E>
where
    F: FnOnce(&mut Option<E>) -> Option<V>,
    E: From<LocatedError>,
{
    let caller = Location::caller();
    try_with_slot_or(call, || LocatedError::new(caller.file(), caller.line()))
}

/// Like [`try_with_slot`], with the fallback error supplied by `origin`.
///
/// `origin` runs only when the callee fails without filling the slot. Pass
/// `|| located!()` to also record the calling function.
///
/// # Examples
///
/// ```
/// use outcome_rail::bridge::try_with_slot_or;
/// use outcome_rail::{located, LocatedError, OutcomeLike};
///
/// fn open_session() -> outcome_rail::Outcome<u32, LocatedError> {
///     try_with_slot_or(|_slot| None, || located!("session refused"))
/// }
///
/// let err = open_session().error_value().unwrap();
/// assert!(err.function().ends_with("open_session"));
/// ```
pub fn try_with_slot_or<V, E, F, O>(call: F, origin: O) -> Outcome<V, E>
where
    F: FnOnce(&mut Option<E>) -> Option<V>,
    E: From<LocatedError>,
    O: FnOnce() -> LocatedError,
{
    let mut slot = None;
    let value = call(&mut slot);
    from_optional(value, || slot.unwrap_or_else(|| origin().into()))
}

/// Calls a status-returning API that reports failure by returning `false`
/// and writing into an error slot.
///
/// # Examples
///
/// ```
/// use outcome_rail::bridge::try_with_slot_flag;
/// use outcome_rail::{LocatedError, OutcomeLike};
///
/// let removed = try_with_slot_flag::<LocatedError, _>(|_slot| true);
/// assert_eq!(removed.value(), Some(()));
///
/// let refused = try_with_slot_flag::<LocatedError, _>(|_slot| false);
/// assert_eq!(refused.error_value().unwrap().file(), file!());
/// ```
#[track_caller]
pub fn try_with_slot_flag<E, F>(call: F) -> Outcome<(), E>
where
    F: FnOnce(&mut Option<E>) -> bool,
    E: From<LocatedError>,
{
    let caller = Location::caller();
    try_with_slot_or(
        |slot| call(slot).then_some(()),
        || LocatedError::new(caller.file(), caller.line()),
    )
}
