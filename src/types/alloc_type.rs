#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
#[doc(hidden)]
pub use std::format;
#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub use alloc::format;
