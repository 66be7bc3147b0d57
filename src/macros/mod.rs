//! Macros for building location-tagged errors.
//!
//! - [`macro@crate::located`] - Creates a [`LocatedError`](crate::types::LocatedError)
//!   recording the calling function, `file!()` and `line!()`, with an optional
//!   formatted message.
//! - [`macro@crate::function_path`] - Expands to the path of the enclosing function.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{located, Outcome, OutcomeLike};
//!
//! fn find(id: u32) -> Outcome<&'static str, outcome_rail::LocatedError> {
//!     Outcome::from_option(None, || located!("user {} not found", id))
//! }
//!
//! let err = find(7).error_value().unwrap();
//! assert_eq!(err.message(), Some("user 7 not found"));
//! assert!(err.function().ends_with("find"));
//! ```

/// Expands to the fully qualified path of the enclosing function as a `&'static str`.
///
/// Trailing `{{closure}}` segments are trimmed, so a closure reports the function
/// that defines it.
///
/// # Examples
///
/// ```
/// fn whoami() -> &'static str {
///     outcome_rail::function_path!()
/// }
///
/// assert!(whoami().ends_with("whoami"));
/// ```
#[macro_export]
macro_rules! function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let mut name = name.strip_suffix("::__here").unwrap_or(name);
        while let Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }};
}

/// Creates a [`LocatedError`](crate::types::LocatedError) tagged with the calling
/// function, source file and line number.
///
/// # Syntax
///
/// - `located!()` - No message
/// - `located!("format string", args...)` - Message built with `format!`
///
/// # Examples
///
/// ```
/// use outcome_rail::located;
///
/// let bare = located!();
/// assert_eq!(bare.message(), None);
/// assert_eq!(bare.line(), line!() - 2);
///
/// let attempts = 3;
/// let err = located!("gave up after {} attempts", attempts);
/// assert_eq!(err.message(), Some("gave up after 3 attempts"));
/// ```
#[macro_export]
macro_rules! located {
    () => {
        $crate::types::LocatedError::new(file!(), line!()).with_function($crate::function_path!())
    };
    ($($arg:tt)+) => {
        $crate::types::LocatedError::new(file!(), line!())
            .with_function($crate::function_path!())
            .with_message($crate::types::alloc_type::format!($($arg)+))
    };
}
