use crate::types::alloc_type::String;
use core::fmt::{self, Display};
use core::panic::Location;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generic error tagged with where it was created.
///
/// Used when no domain-specific error is available, for example when a
/// legacy-style call reports failure without filling its error slot (see
/// [`crate::bridge`]). Carries an optional message plus the originating
/// function path, source file and line number.
///
/// Prefer the [`located!`](crate::located) macro, which also records the
/// calling function. [`LocatedError::here`] only knows the file and line.
///
/// # Examples
///
/// ```
/// use outcome_rail::located;
///
/// fn load() -> outcome_rail::LocatedError {
///     located!("config missing")
/// }
///
/// let err = load();
/// assert_eq!(err.message(), Some("config missing"));
/// assert!(err.function().ends_with("load"));
/// assert_eq!(err.file(), file!());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocatedError {
    pub(crate) message: Option<String>,
    pub(crate) function: Option<String>,
    pub(crate) file: String,
    pub(crate) line: u32,
}

impl LocatedError {
    /// Creates an error pointing at `file:line`.
    #[inline]
    pub fn new<F: Into<String>>(file: F, line: u32) -> Self {
        Self {
            message: None,
            function: None,
            file: file.into(),
            line,
        }
    }

    /// Creates an error pointing at the caller's file and line.
    #[track_caller]
    #[inline]
    pub fn here() -> Self {
        let caller = Location::caller();
        Self::new(caller.file(), caller.line())
    }

    /// Attaches a human-readable message.
    #[inline]
    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Records the path of the function that created the error.
    #[inline]
    pub fn with_function<S: Into<String>>(mut self, function: S) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Message attached with [`with_message`](LocatedError::with_message), if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Function path, or `"<unknown>"` when it was not recorded.
    #[inline]
    pub fn function(&self) -> &str {
        self.function.as_deref().unwrap_or("<unknown>")
    }

    /// Source file the error was created in.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number the error was created at.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl Display for LocatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message)?,
            None => f.write_str("operation failed")?,
        }
        write!(f, " (in {} at {}:{})", self.function(), self.file, self.line)
    }
}

impl core::error::Error for LocatedError {}
