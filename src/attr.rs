//! Typed key/value attributes attached to errors.
//!
//! An [`Attr`] pairs a key with one of a small set of value kinds:
//!
//! - [`AttrValue::Str`] for text
//! - [`AttrValue::Int`] for integers
//! - [`AttrValue::Uuid`] for identifiers
//! - [`AttrValue::Time`] for timestamps
//! - [`AttrValue::Error`] for nested error values
//! - [`AttrValue::Opaque`] for anything else that can describe itself via `Debug`
//!
//! Keeping the kind explicit lets the same attribute render two ways: verbatim
//! in the flat `key=value` text form, and as a typed field on a structured log
//! record (see [`crate::logging`]).
//!
//! # Examples
//!
//! ```
//! use error_braid::Attr;
//!
//! let attr = Attr::string("region", "eu-west-1");
//! assert_eq!(attr.key(), "region");
//! assert_eq!(attr.to_string(), "region=eu-west-1");
//! ```

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::traits::Loggable;

/// Inline-capacity vector of attributes.
///
/// Most errors carry a handful of attributes, so the first four live inline
/// without a heap allocation.
pub type AttrVec = SmallVec<[Attr; 4]>;

/// A single named attribute.
///
/// Attributes are immutable after construction; build them through the typed
/// constructors and read them back through [`key`](Attr::key) and
/// [`value`](Attr::value).
///
/// # Examples
///
/// ```
/// use error_braid::Attr;
///
/// let attr = Attr::int("attempt", 3);
/// assert_eq!(attr.to_string(), "attempt=3");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    key: Cow<'static, str>,
    value: AttrValue,
}

/// The value carried by an [`Attr`], tagged by kind.
///
/// Shared payloads sit behind [`Arc`], so cloning an attribute never clones
/// the underlying error or opaque value.
#[derive(Debug, Clone)]
pub enum AttrValue {
    /// Text value, rendered verbatim.
    Str(Cow<'static, str>),
    /// Integer value, rendered in decimal.
    Int(i64),
    /// Identifier, rendered in canonical hyphenated form.
    Uuid(Uuid),
    /// UTC timestamp.
    Time(DateTime<Utc>),
    /// A nested error value, rendered through its `Display` text.
    Error(Arc<dyn StdError + Send + Sync>),
    /// Fallback for values with no dedicated kind, rendered through `Debug`.
    Opaque(Arc<dyn fmt::Debug + Send + Sync>),
}

impl Attr {
    /// Creates a text attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_braid::Attr;
    ///
    /// assert_eq!(Attr::string("stage", "verify").to_string(), "stage=verify");
    /// ```
    #[inline]
    pub fn string(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Attr {
            key: key.into(),
            value: AttrValue::Str(value.into()),
        }
    }

    /// Creates an integer attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_braid::Attr;
    ///
    /// assert_eq!(Attr::int("attempt", 3).to_string(), "attempt=3");
    /// ```
    #[inline]
    pub fn int(key: impl Into<Cow<'static, str>>, value: i64) -> Self {
        Attr {
            key: key.into(),
            value: AttrValue::Int(value),
        }
    }

    /// Creates an identifier attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_braid::Attr;
    /// use uuid::Uuid;
    ///
    /// let attr = Attr::uuid("request", Uuid::nil());
    /// assert_eq!(attr.to_string(), "request=00000000-0000-0000-0000-000000000000");
    /// ```
    #[inline]
    pub fn uuid(key: impl Into<Cow<'static, str>>, value: Uuid) -> Self {
        Attr {
            key: key.into(),
            value: AttrValue::Uuid(value),
        }
    }

    /// Creates a timestamp attribute.
    ///
    /// The flat form uses chrono's default display; the structured log form
    /// uses RFC 3339 (see [`crate::logging::fields`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use error_braid::Attr;
    ///
    /// let at = Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap();
    /// assert_eq!(Attr::time("seen", at).to_string(), format!("seen={at}"));
    /// ```
    #[inline]
    pub fn time(key: impl Into<Cow<'static, str>>, value: DateTime<Utc>) -> Self {
        Attr {
            key: key.into(),
            value: AttrValue::Time(value),
        }
    }

    /// Creates an attribute carrying another error value.
    ///
    /// Useful for recording a secondary failure (a cleanup error, the last
    /// error of a retry loop) without wrapping it as a cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use error_braid::Attr;
    ///
    /// let attr = Attr::error("last", io::Error::other("disk offline"));
    /// assert_eq!(attr.to_string(), "last=disk offline");
    /// ```
    pub fn error(
        key: impl Into<Cow<'static, str>>,
        value: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Attr {
            key: key.into(),
            value: AttrValue::Error(Arc::new(value)),
        }
    }

    /// Creates an attribute from any `Debug` value.
    ///
    /// The value is kept as-is and rendered through its `Debug` form, so
    /// nothing is lost between construction and the log sink.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_braid::Attr;
    ///
    /// #[derive(Debug)]
    /// struct Endpoint {
    ///     host: &'static str,
    ///     port: u16,
    /// }
    ///
    /// let attr = Attr::any("endpoint", Endpoint { host: "db1", port: 5432 });
    /// assert_eq!(attr.to_string(), r#"endpoint=Endpoint { host: "db1", port: 5432 }"#);
    /// ```
    pub fn any(
        key: impl Into<Cow<'static, str>>,
        value: impl fmt::Debug + Send + Sync + 'static,
    ) -> Self {
        Attr {
            key: key.into(),
            value: AttrValue::Opaque(Arc::new(value)),
        }
    }

    /// Creates a text attribute from a [`Loggable`] value.
    ///
    /// The value decides its own representation through
    /// [`log_string`](Loggable::log_string), which is captured eagerly.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_braid::{Attr, Loggable};
    ///
    /// struct ApiKey;
    ///
    /// impl Loggable for ApiKey {
    ///     fn log_string(&self) -> String {
    ///         "[redacted]".to_owned()
    ///     }
    /// }
    ///
    /// assert_eq!(Attr::loggable("key", &ApiKey).to_string(), "key=[redacted]");
    /// ```
    pub fn loggable(key: impl Into<Cow<'static, str>>, value: &dyn Loggable) -> Self {
        Attr {
            key: key.into(),
            value: AttrValue::Str(value.log_string().into()),
        }
    }

    /// Returns the attribute key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the attribute value.
    #[inline]
    pub fn value(&self) -> &AttrValue {
        &self.value
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(value) => f.write_str(value),
            AttrValue::Int(value) => fmt::Display::fmt(value, f),
            AttrValue::Uuid(value) => fmt::Display::fmt(value, f),
            AttrValue::Time(value) => fmt::Display::fmt(value, f),
            AttrValue::Error(value) => fmt::Display::fmt(value, f),
            AttrValue::Opaque(value) => write!(f, "{value:?}"),
        }
    }
}

impl PartialEq for AttrValue {
    /// Structural equality for the plain kinds; `Error` and `Opaque` payloads
    /// compare by their rendered text. Values of different kinds are never
    /// equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttrValue::Str(a), AttrValue::Str(b)) => a == b,
            (AttrValue::Int(a), AttrValue::Int(b)) => a == b,
            (AttrValue::Uuid(a), AttrValue::Uuid(b)) => a == b,
            (AttrValue::Time(a), AttrValue::Time(b)) => a == b,
            (AttrValue::Error(a), AttrValue::Error(b)) => a.to_string() == b.to_string(),
            (AttrValue::Opaque(a), AttrValue::Opaque(b)) => {
                format!("{a:?}") == format!("{b:?}")
            }
            _ => false,
        }
    }
}
