//! The structured error type and its construction surface.
//!
//! [`StructuredError`] keeps three things apart that stringly errors mash
//! together: its own message, the causes it wraps (zero, one, or several),
//! and a list of typed attributes. The flat text form composes them back on
//! demand, so nothing is lost for the structured consumers in
//! [`crate::logging`] and [`crate::classify`].
//!
//! # Examples
//!
//! ```
//! use std::io;
//! use error_braid::{Attr, StructuredError};
//!
//! let err = StructuredError::wrap("load profile", io::Error::other("socket closed"))
//!     .with_attr(Attr::string("region", "eu-west-1"));
//!
//! assert_eq!(err.to_string(), "load profile: socket closed region=eu-west-1");
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::slice;

use crate::attr::{Attr, AttrVec};
use crate::traits::{IntoAttrs, Loggable};

/// Boxed error trait object, the currency for wrapped causes.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result alias defaulting the error type to [`StructuredError`].
pub type Result<T, E = StructuredError> = std::result::Result<T, E>;

/// An error carrying a message, optional causes, and typed attributes.
///
/// Three shapes share this one type, distinguished by how they were built:
///
/// - [`new`](StructuredError::new): a plain error with no cause
/// - [`wrap`](StructuredError::wrap): a message layered over one cause
/// - [`wrap_multi`](StructuredError::wrap_multi): a message layered over
///   several independent causes, as produced by fan-out operations
///
/// The composed message is the error's own message, a `": "` separator, and
/// the cause text; an empty message drops the separator, and multiple causes
/// join their texts with `/`. The full flat form via `Display` appends one
/// ` key=value` pair per attribute in insertion order.
///
/// Values are immutable once built. [`with_attr`](StructuredError::with_attr)
/// consumes and returns, builder style.
///
/// # Examples
///
/// ```
/// use std::io;
/// use error_braid::StructuredError;
///
/// let plain = StructuredError::new("checksum mismatch");
/// assert_eq!(plain.to_string(), "checksum mismatch");
///
/// let wrapped = StructuredError::wrap("verify block", plain);
/// assert_eq!(wrapped.to_string(), "verify block: checksum mismatch");
///
/// let fanned = StructuredError::wrap_multi(
///     "flush replicas",
///     vec![
///         io::Error::other("disk offline").into(),
///         io::Error::other("quota exceeded").into(),
///     ],
/// );
/// assert_eq!(fanned.to_string(), "flush replicas: disk offline/quota exceeded");
/// ```
#[derive(Debug)]
pub struct StructuredError {
    message: String,
    causes: Causes,
    attrs: AttrVec,
}

/// Cause storage. `Many` is non-empty, enforced at construction.
#[derive(Debug)]
enum Causes {
    None,
    One(BoxError),
    Many(Vec<BoxError>),
}

impl StructuredError {
    /// Creates a plain error with no cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_braid::StructuredError;
    ///
    /// let err = StructuredError::new("cache miss");
    /// assert_eq!(err.to_string(), "cache miss");
    /// assert!(err.causes().is_empty());
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        StructuredError {
            message: message.into(),
            causes: Causes::None,
            attrs: AttrVec::new(),
        }
    }

    /// Wraps one cause under a new message.
    ///
    /// An empty message renders as the cause text alone, with no separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use error_braid::StructuredError;
    ///
    /// let err = StructuredError::wrap("read config", io::Error::other("disk offline"));
    /// assert_eq!(err.to_string(), "read config: disk offline");
    ///
    /// let transparent = StructuredError::wrap("", io::Error::other("disk offline"));
    /// assert_eq!(transparent.to_string(), "disk offline");
    /// ```
    pub fn wrap(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        StructuredError {
            message: message.into(),
            causes: Causes::One(cause.into()),
            attrs: AttrVec::new(),
        }
    }

    /// Wraps several independent causes under a new message.
    ///
    /// The cause texts join with `/` in the composed message, and every cause
    /// stays individually reachable through [`causes`](StructuredError::causes)
    /// and [`crate::chain`].
    ///
    /// # Panics
    ///
    /// Panics if `causes` is empty. A multi-cause error with nothing inside
    /// is a construction bug at the call site, caught here rather than
    /// surfacing later as an inexplicable empty chain.
    pub fn wrap_multi(message: impl Into<String>, causes: Vec<BoxError>) -> Self {
        assert!(!causes.is_empty(), "wrap_multi requires at least one cause");
        StructuredError {
            message: message.into(),
            causes: Causes::Many(causes),
            attrs: AttrVec::new(),
        }
    }

    /// Appends attributes, splicing collections and [`Attributable`]
    /// contributions in place.
    ///
    /// [`Attributable`]: crate::Attributable
    ///
    /// # Examples
    ///
    /// ```
    /// use error_braid::{Attr, StructuredError};
    ///
    /// let err = StructuredError::new("payment declined")
    ///     .with_attr(Attr::string("card", "visa"))
    ///     .with_attr(Attr::int("amount", 1200));
    ///
    /// assert_eq!(err.to_string(), "payment declined card=visa amount=1200");
    /// ```
    #[must_use]
    pub fn with_attr(mut self, attrs: impl IntoAttrs) -> Self {
        self.attrs.extend(attrs.into_attrs());
        self
    }

    /// Returns the composed message without attributes.
    ///
    /// This is the text the structured log dispatch uses as the record
    /// message; the attributes travel separately as fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use error_braid::{Attr, StructuredError};
    ///
    /// let err = StructuredError::wrap("read config", io::Error::other("disk offline"))
    ///     .with_attr(Attr::int("attempt", 2));
    ///
    /// assert_eq!(err.message(), "read config: disk offline");
    /// ```
    pub fn message(&self) -> String {
        match &self.causes {
            Causes::None => self.message.clone(),
            Causes::One(cause) => compose(&self.message, &cause.to_string()),
            Causes::Many(causes) => {
                let joined = causes
                    .iter()
                    .map(|cause| cause.to_string())
                    .collect::<Vec<_>>()
                    .join("/");
                compose(&self.message, &joined)
            }
        }
    }

    /// Returns the attributes in insertion order.
    #[inline]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Returns the wrapped causes, empty for a plain error.
    pub fn causes(&self) -> &[BoxError] {
        match &self.causes {
            Causes::None => &[],
            Causes::One(cause) => slice::from_ref(cause),
            Causes::Many(causes) => causes,
        }
    }
}

fn compose(message: &str, cause_text: &str) -> String {
    if message.is_empty() {
        cause_text.to_owned()
    } else {
        format!("{message}: {cause_text}")
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())?;
        for attr in &self.attrs {
            write!(f, " {attr}")?;
        }
        Ok(())
    }
}

impl StdError for StructuredError {
    /// The first cause. Multi-cause fan-out is only visible through
    /// [`causes`](StructuredError::causes) and [`crate::chain`]; `source` is
    /// the std-ecosystem view, which is single-lane.
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.causes {
            Causes::None => None,
            Causes::One(cause) => Some(&**cause),
            Causes::Many(causes) => causes
                .first()
                .map(|cause| -> &(dyn StdError + 'static) { &**cause }),
        }
    }
}

impl Loggable for StructuredError {
    /// The flat form, identical to `Display`.
    fn log_string(&self) -> String {
        self.to_string()
    }
}

/// Extension methods lifting plain `Result`s into structured errors.
///
/// # Examples
///
/// ```
/// use error_braid::ResultExt;
///
/// fn read_state() -> error_braid::Result<String> {
///     std::fs::read_to_string("state.json").wrap("load state")
/// }
/// ```
pub trait ResultExt<T> {
    /// Wraps the error side under `message`.
    fn wrap(self, message: impl Into<String>) -> Result<T>;

    /// Wraps the error side under `message` and attaches attributes built by
    /// `attrs`.
    ///
    /// The closure only runs on the error path, so attribute construction is
    /// free for successful calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use error_braid::{Attr, ResultExt};
    ///
    /// let result: Result<(), io::Error> = Err(io::Error::other("disk offline"));
    /// let err = result
    ///     .wrap_with("load state", || Attr::string("path", "state.json"))
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "load state: disk offline path=state.json");
    /// ```
    fn wrap_with<A>(self, message: impl Into<String>, attrs: impl FnOnce() -> A) -> Result<T>
    where
        A: IntoAttrs;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn wrap(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|cause| StructuredError::wrap(message, cause))
    }

    #[inline]
    fn wrap_with<A>(self, message: impl Into<String>, attrs: impl FnOnce() -> A) -> Result<T>
    where
        A: IntoAttrs,
    {
        self.map_err(|cause| StructuredError::wrap(message, cause).with_attr(attrs()))
    }
}
