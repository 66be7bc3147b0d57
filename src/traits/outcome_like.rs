use crate::types::Outcome;

/// Abstraction over types that represent either a success value or a failure reason.
///
/// Implementors supply the two constructors and [`analyze`](OutcomeLike::analyze),
/// the case-analysis primitive. Every other method has a default body written
/// purely in terms of `analyze`, so a new implementor gets the whole combinator
/// algebra for free. `map` and `map_error` are further reduced to
/// [`flat_map`](OutcomeLike::flat_map) and
/// [`flat_map_error`](OutcomeLike::flat_map_error).
///
/// Fallback arguments are thunks and only run on the path that needs them.
///
/// # Associated Types
///
/// * `Value` - The success value type
/// * `Error` - The failure reason type
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeLike};
///
/// fn halve(x: i32) -> Outcome<i32, String> {
///     if x % 2 == 0 {
///         Outcome::ok(x / 2)
///     } else {
///         Outcome::err(format!("{x} is odd"))
///     }
/// }
///
/// let chained = Outcome::ok(12).flat_map(halve).flat_map(halve);
/// assert_eq!(chained, Outcome::ok(3));
///
/// let failed = Outcome::ok(6).flat_map(halve).flat_map(halve);
/// assert_eq!(failed.error_value(), Some("3 is odd".to_string()));
/// ```
pub trait OutcomeLike: Sized {
    type Value;
    type Error;

    /// Constructs a successful outcome wrapping `value`.
    fn from_value(value: Self::Value) -> Self;

    /// Constructs a failed outcome wrapping `error`.
    fn from_error(error: Self::Error) -> Self;

    /// Case analysis.
    ///
    /// Applies exactly one of `on_ok` or `on_err` to the wrapped payload and
    /// returns what it produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeLike};
    ///
    /// let described = Outcome::<u8, &str>::err("timeout")
    ///     .analyze(|v| format!("got {v}"), |e| format!("failed: {e}"));
    /// assert_eq!(described, "failed: timeout");
    /// ```
    fn analyze<R, S, F>(self, on_ok: S, on_err: F) -> R
    where
        S: FnOnce(Self::Value) -> R,
        F: FnOnce(Self::Error) -> R;

    /// Returns the value of a success, `None` otherwise.
    #[inline]
    fn value(self) -> Option<Self::Value> {
        self.analyze(Some, |_| None)
    }

    /// Returns the error of a failure, `None` otherwise.
    #[inline]
    fn error_value(self) -> Option<Self::Error> {
        self.analyze(|_| None, Some)
    }

    /// Applies `f` to a success value and returns its outcome directly,
    /// re-wrapping a failure unchanged.
    ///
    /// `f` is not invoked on the failure path.
    #[inline]
    fn flat_map<U, F>(self, f: F) -> Outcome<U, Self::Error>
    where
        F: FnOnce(Self::Value) -> Outcome<U, Self::Error>,
    {
        self.analyze(f, Outcome::Err)
    }

    /// Synonym for [`flat_map`](OutcomeLike::flat_map), for pipelines that read
    /// as a sequence of dependent steps.
    #[inline]
    fn chain<U, F>(self, f: F) -> Outcome<U, Self::Error>
    where
        F: FnOnce(Self::Value) -> Outcome<U, Self::Error>,
    {
        self.flat_map(f)
    }

    /// Maps a success value with `f`, re-wrapping a failure unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeLike};
    ///
    /// let len = Outcome::<&str, ()>::ok("success").map(str::len);
    /// assert_eq!(len, Outcome::ok(7));
    /// ```
    #[inline]
    fn map<U, F>(self, f: F) -> Outcome<U, Self::Error>
    where
        F: FnOnce(Self::Value) -> U,
    {
        self.flat_map(|value| Outcome::Ok(f(value)))
    }

    /// Applies `f` to a failure and returns its outcome directly, passing a
    /// success value through unchanged.
    #[inline]
    fn flat_map_error<G, F>(self, f: F) -> Outcome<Self::Value, G>
    where
        F: FnOnce(Self::Error) -> Outcome<Self::Value, G>,
    {
        self.analyze(Outcome::Ok, f)
    }

    /// Maps a failure with `f`, passing a success value through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeLike};
    ///
    /// let o = Outcome::<i32, u16>::err(404).map_error(|code| format!("HTTP {code}"));
    /// assert_eq!(o, Outcome::err("HTTP 404".to_string()));
    /// ```
    #[inline]
    fn map_error<G, F>(self, f: F) -> Outcome<Self::Value, G>
    where
        F: FnOnce(Self::Error) -> G,
    {
        self.flat_map_error(|error| Outcome::Err(f(error)))
    }

    /// Returns the success value, or `fallback()` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeLike};
    ///
    /// assert_eq!(Outcome::<&str, ()>::ok("left").recover(|| "right"), "left");
    /// assert_eq!(Outcome::<&str, ()>::err(()).recover(|| "right"), "right");
    /// ```
    #[inline]
    fn recover<F>(self, fallback: F) -> Self::Value
    where
        F: FnOnce() -> Self::Value,
    {
        self.value().unwrap_or_else(fallback)
    }

    /// Alias for [`recover`](OutcomeLike::recover).
    #[inline]
    fn or_value<F>(self, fallback: F) -> Self::Value
    where
        F: FnOnce() -> Self::Value,
    {
        self.recover(fallback)
    }

    /// Returns `self` if it is a success, or `fallback()` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeLike};
    ///
    /// let left = Outcome::<&str, &str>::err("left");
    /// let picked = left.recover_with(|| Outcome::ok("right"));
    /// assert_eq!(picked, Outcome::ok("right"));
    /// ```
    #[inline]
    fn recover_with<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.analyze(Self::from_value, |_| fallback())
    }

    /// Pairs this success value with the success value of `right()`.
    ///
    /// `right` is evaluated only when `self` is a success. When both sides
    /// fail, the earlier (left) error wins because the right side never runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeLike};
    ///
    /// let pair = Outcome::<i32, &str>::ok(3).both(|| Outcome::ok(4));
    /// assert_eq!(pair.map(|(a, b)| a + b), Outcome::ok(7));
    ///
    /// let left_err = Outcome::<i32, &str>::err("a").both(|| Outcome::<i32, &str>::err("b"));
    /// assert_eq!(left_err, Outcome::err("a"));
    /// ```
    #[inline]
    fn both<R, F>(self, right: F) -> Outcome<(Self::Value, R::Value), Self::Error>
    where
        R: OutcomeLike<Error = Self::Error>,
        F: FnOnce() -> R,
    {
        self.flat_map(|left| right().map(|right| (left, right)))
    }

    /// Converts into a standard `Result`, so `?` can be used on it.
    #[inline]
    fn into_result(self) -> Result<Self::Value, Self::Error> {
        self.analyze(Ok, Err)
    }
}

/// Free-function form of [`OutcomeLike::both`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{both, Outcome};
///
/// let right_err = both(Outcome::<i32, &str>::ok(3), || Outcome::<i32, &str>::err("b"));
/// assert_eq!(right_err, Outcome::err("b"));
/// ```
#[inline]
pub fn both<L, R, F>(left: L, right: F) -> Outcome<(L::Value, R::Value), L::Error>
where
    L: OutcomeLike,
    R: OutcomeLike<Error = L::Error>,
    F: FnOnce() -> R,
{
    left.both(right)
}

impl<T, E> OutcomeLike for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn from_value(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn from_error(error: E) -> Self {
        Err(error)
    }

    #[inline]
    fn analyze<R, S, F>(self, on_ok: S, on_err: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }
}
