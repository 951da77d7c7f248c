//! Mapping error chains to boundary categories.
//!
//! Service boundaries need a status verdict, not a cause tree. [`classify`]
//! inspects the whole chain of an error and answers with a [`Category`];
//! turning a category into a wire-level status code stays with the caller,
//! which knows its own protocol.
//!
//! # Examples
//!
//! ```
//! use error_braid::{classify, Category, NotPermitted, StructuredError};
//!
//! let err = StructuredError::wrap("drop table", NotPermitted);
//! assert_eq!(classify(&err), Category::Unauthenticated);
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::chain::{chain, chain_contains, find_in_chain};

/// The message sqlx attaches to a row-not-found failure. Matched textually
/// for errors that crossed a stringly boundary before reaching us.
const SQLX_NO_ROWS: &str = "no rows returned by a query that expected to return at least one row";

/// Sentinel error for denied operations.
///
/// Return or wrap this where an authorization check fails; the classifier
/// recognizes it anywhere in a chain.
///
/// # Examples
///
/// ```
/// use error_braid::{chain_contains, NotPermitted, StructuredError};
///
/// let err = StructuredError::wrap("rotate key", NotPermitted);
/// assert!(chain_contains(&err, &NotPermitted));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotPermitted;

impl fmt::Display for NotPermitted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not permitted")
    }
}

impl StdError for NotPermitted {}

/// Boundary verdict for a classified error.
///
/// The set is deliberately small: callers map these onto their protocol's
/// status codes. `Internal` is the default verdict for anything the
/// predicates do not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Category {
    /// The caller is not allowed to do this.
    Unauthenticated,
    /// The requested entity does not exist.
    NotFound,
    /// The request itself is malformed.
    InvalidArgument,
    /// Everything else.
    #[default]
    Internal,
}

impl Category {
    /// Returns the category as a static string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Unauthenticated => "Unauthenticated",
            Category::NotFound => "NotFound",
            Category::InvalidArgument => "InvalidArgument",
            Category::Internal => "Internal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an error chain into a [`Category`].
///
/// Predicates run in order and the first match wins:
///
/// 1. the chain contains [`NotPermitted`]: `Unauthenticated`
/// 2. (feature `sqlx`) a chain node is `sqlx::Error::RowNotFound`: `NotFound`
/// 3. a chain node's text equals sqlx's row-not-found message: `NotFound`
/// 4. a chain node is a [`uuid::Error`]: `InvalidArgument`
/// 5. (feature `serde_json`) a chain node is a syntax-level
///    `serde_json::Error`: `InvalidArgument`
/// 6. otherwise `Internal`
///
/// Malformed-input detection is typed where the producing crate exposes a
/// typed error; only the sqlx message keeps a textual arm, for errors that
/// were stringified upstream or when the `sqlx` feature is off.
///
/// # Examples
///
/// ```
/// use error_braid::{classify, Category, StructuredError};
/// use uuid::Uuid;
///
/// let parse_err = Uuid::parse_str("not-a-uuid").unwrap_err();
/// let err = StructuredError::wrap("parse user id", parse_err);
/// assert_eq!(classify(&err), Category::InvalidArgument);
///
/// let unknown = StructuredError::new("socket closed");
/// assert_eq!(classify(&unknown), Category::Internal);
/// ```
pub fn classify(err: &(dyn StdError + 'static)) -> Category {
    if chain_contains(err, &NotPermitted) {
        return Category::Unauthenticated;
    }

    #[cfg(feature = "sqlx")]
    if find_in_chain::<sqlx::Error>(err).is_some_and(|e| matches!(e, sqlx::Error::RowNotFound)) {
        return Category::NotFound;
    }

    if chain(err).any(|node| node.to_string() == SQLX_NO_ROWS) {
        return Category::NotFound;
    }

    if find_in_chain::<uuid::Error>(err).is_some() {
        return Category::InvalidArgument;
    }

    #[cfg(feature = "serde_json")]
    if find_in_chain::<serde_json::Error>(err).is_some_and(serde_json::Error::is_syntax) {
        return Category::InvalidArgument;
    }

    Category::Internal
}
