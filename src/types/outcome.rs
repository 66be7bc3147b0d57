use crate::traits::OutcomeLike;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error type for outcomes that can never fail.
///
/// `Outcome<V, NoError>` statically guarantees the `Err` variant is unreachable,
/// which is what lets [`Outcome::into_ok`] extract the value without a fallback.
///
/// # Examples
///
/// ```
/// use outcome_rail::{NoError, Outcome};
///
/// let always: Outcome<i32, NoError> = Outcome::ok(7);
/// assert_eq!(always.into_ok(), 7);
/// ```
pub type NoError = core::convert::Infallible;

/// The outcome of an operation: either a success holding a value or a failure
/// holding an error.
///
/// An `Outcome` is in exactly one of its two variants and owns its payload.
/// It is never mutated by the combinators; every combinator consumes the
/// outcome and produces a new one.
///
/// Inspection goes through [`OutcomeLike::analyze`], the only operation that
/// branches on the variant. Everything else in [`OutcomeLike`] (reading the
/// value, mapping, chaining, recovery, conjunction) is derived from it.
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` serializes as an externally tagged enum
/// (`{"Ok": ..}` or `{"Err": ..}`).
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The failure reason type
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeLike};
///
/// let parsed: Outcome<i32, &str> = Outcome::ok(20);
/// let doubled = parsed.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::ok(40));
///
/// let failed: Outcome<i32, &str> = Outcome::err("not a number");
/// assert_eq!(failed.recover(|| 0), 0);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub enum Outcome<V, E> {
    Ok(V),
    Err(E),
}

impl<V, E> Outcome<V, E> {
    /// Wraps `value` as a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeLike};
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert_eq!(o.value(), Some(42));
    /// ```
    #[inline]
    pub const fn ok(value: V) -> Self {
        Self::Ok(value)
    }

    /// Wraps `error` as a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeLike};
    ///
    /// let o = Outcome::<i32, &str>::err("boom");
    /// assert_eq!(o.error_value(), Some("boom"));
    /// ```
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Builds an outcome from an optional value, failing with `or_fail()` when absent.
    ///
    /// `or_fail` only runs when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let found = Outcome::from_option(Some(3), || "missing");
    /// assert_eq!(found, Outcome::ok(3));
    ///
    /// let absent = Outcome::<i32, _>::from_option(None, || "missing");
    /// assert_eq!(absent, Outcome::err("missing"));
    /// ```
    #[inline]
    pub fn from_option<F>(value: Option<V>, or_fail: F) -> Self
    where
        F: FnOnce() -> E,
    {
        crate::convert::from_optional(value, or_fail)
    }

    /// Borrows the payload, producing an outcome of references.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Mutably borrows the payload, producing an outcome of mutable references.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns `true` for the `Ok` variant.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.as_ref().analyze(|_| true, |_| false)
    }

    /// Returns `true` for the `Err` variant.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
}

impl<V> Outcome<V, NoError> {
    /// Extracts the value of an outcome that cannot fail.
    #[inline]
    pub fn into_ok(self) -> V {
        self.analyze(|value| value, |never| match never {})
    }
}

impl<V, E> OutcomeLike for Outcome<V, E> {
    type Value = V;
    type Error = E;

    #[inline]
    fn from_value(value: V) -> Self {
        Self::Ok(value)
    }

    #[inline]
    fn from_error(error: E) -> Self {
        Self::Err(error)
    }

    #[inline]
    fn analyze<R, S, F>(self, on_ok: S, on_err: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }
}

impl<V: PartialEq, E: PartialEq> PartialEq for Outcome<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref().analyze(
            |left| other.as_ref().value().is_some_and(|right| left == right),
            |left| other.as_ref().error_value().is_some_and(|right| left == right),
        )
    }
}

impl<V: Eq, E: Eq> Eq for Outcome<V, E> {}

impl<V: Hash, E: Hash> Hash for Outcome<V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref()
            .analyze(|value| (Some(value), None), |error| (None, Some(error)))
            .hash(state)
    }
}

impl<V: Display, E: Display> Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, payload): (&str, &dyn Display) = self.as_ref().analyze(
            |value| ("Ok", value as &dyn Display),
            |error| ("Err", error as &dyn Display),
        );
        write!(f, "{}({})", label, payload)
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        crate::convert::materialize(result)
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

/// Collects values until the first failure, which becomes the overall error.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> = vec![Outcome::ok(1), Outcome::ok(2)].into_iter().collect();
/// assert_eq!(all, Outcome::ok(vec![1, 2]));
///
/// let first_err: Outcome<Vec<i32>, &str> =
///     vec![Outcome::ok(1), Outcome::err("a"), Outcome::err("b")].into_iter().collect();
/// assert_eq!(first_err, Outcome::err("a"));
/// ```
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(OutcomeLike::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}
