//! Construction macros for structured errors.
//!
//! The builder API takes one attribute argument per call; these macros give
//! the common shape of "message plus a handful of attributes" in a single
//! expression:
//!
//! - [`macro@crate::braid`] builds a plain error.
//! - [`macro@crate::wrap`] layers a message over one cause.
//! - [`macro@crate::wrap_multi`] layers a message over several causes.
//!
//! # Examples
//!
//! ```
//! use std::io;
//! use error_braid::{wrap, Attr};
//!
//! let err = wrap!(
//!     "load profile",
//!     io::Error::other("socket closed"),
//!     Attr::string("region", "eu-west-1"),
//!     Attr::int("attempt", 2),
//! );
//!
//! assert_eq!(
//!     err.to_string(),
//!     "load profile: socket closed region=eu-west-1 attempt=2",
//! );
//! ```

/// Builds a plain [`StructuredError`](crate::StructuredError) with optional
/// attributes.
///
/// Every argument after the message is any `impl IntoAttrs` value: a single
/// [`Attr`](crate::Attr), a collection, or a reference to an
/// [`Attributable`](crate::Attributable) domain value.
///
/// # Examples
///
/// ```
/// use error_braid::{braid, Attr};
///
/// let err = braid!("cache miss", Attr::string("key", "user:42"));
/// assert_eq!(err.to_string(), "cache miss key=user:42");
/// ```
#[macro_export]
macro_rules! braid {
    ($msg:expr $(, $attrs:expr)* $(,)?) => {
        $crate::StructuredError::new($msg)$(.with_attr($attrs))*
    };
}

/// Wraps one cause under a new message, with optional attributes.
///
/// # Examples
///
/// ```
/// use std::io;
/// use error_braid::wrap;
///
/// let err = wrap!("read config", io::Error::other("disk offline"));
/// assert_eq!(err.to_string(), "read config: disk offline");
/// ```
#[macro_export]
macro_rules! wrap {
    ($msg:expr, $cause:expr $(, $attrs:expr)* $(,)?) => {
        $crate::StructuredError::wrap($msg, $cause)$(.with_attr($attrs))*
    };
}

/// Wraps several causes under a new message, with optional attributes.
///
/// The causes go in brackets; each is converted to
/// [`BoxError`](crate::BoxError) in place.
///
/// # Panics
///
/// Panics if the bracket list is empty, matching
/// [`StructuredError::wrap_multi`](crate::StructuredError::wrap_multi).
///
/// # Examples
///
/// ```
/// use std::io;
/// use error_braid::wrap_multi;
///
/// let err = wrap_multi!(
///     "flush replicas",
///     [io::Error::other("disk offline"), io::Error::other("quota exceeded")],
/// );
///
/// assert_eq!(err.to_string(), "flush replicas: disk offline/quota exceeded");
/// ```
#[macro_export]
macro_rules! wrap_multi {
    ($msg:expr, [$($causes:expr),+ $(,)?] $(, $attrs:expr)* $(,)?) => {
        $crate::StructuredError::wrap_multi(
            $msg,
            ::std::vec![$(::std::convert::Into::<$crate::BoxError>::into($causes)),+],
        )$(.with_attr($attrs))*
    };
}
