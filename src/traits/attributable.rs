//! Trait for values that contribute their own attribute list.

use crate::attr::{Attr, AttrVec};

/// A value that knows which attributes describe it.
///
/// Domain types implement this once, and every error construction site can
/// then splice the same attributes in by passing a reference:
/// `err.with_attr(&value)`. The contributed list lands verbatim, in place,
/// wherever the reference appears in the argument order.
///
/// # Examples
///
/// ```
/// use error_braid::{Attr, AttrVec, Attributable, StructuredError};
///
/// struct Upload {
///     name: &'static str,
///     size: i64,
/// }
///
/// impl Attributable for Upload {
///     fn attributes(&self) -> AttrVec {
///         [Attr::string("name", self.name), Attr::int("size", self.size)]
///             .into_iter()
///             .collect()
///     }
/// }
///
/// let upload = Upload { name: "report.pdf", size: 48213 };
/// let err = StructuredError::new("upload rejected").with_attr(&upload);
/// assert_eq!(err.to_string(), "upload rejected name=report.pdf size=48213");
/// ```
pub trait Attributable {
    /// Returns the attributes describing this value.
    fn attributes(&self) -> AttrVec;
}

impl Attributable for [Attr] {
    /// A slice of attributes acts as a ready-made bundle.
    #[inline]
    fn attributes(&self) -> AttrVec {
        self.iter().cloned().collect()
    }
}

impl Attributable for Vec<Attr> {
    #[inline]
    fn attributes(&self) -> AttrVec {
        self.iter().cloned().collect()
    }
}
