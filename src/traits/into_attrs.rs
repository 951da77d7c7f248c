//! Conversion trait for attribute arguments.
//!
//! Every attribute-accepting position in the crate takes `impl IntoAttrs`, so
//! callers can pass a single [`Attr`], a collection of them, or a reference to
//! any [`Attributable`] domain value, and the result is always one flat
//! [`AttrVec`].
//!
//! # Examples
//!
//! ```
//! use error_braid::{Attr, StructuredError};
//!
//! let err = StructuredError::new("payment declined")
//!     .with_attr(Attr::string("card", "visa"))
//!     .with_attr([Attr::int("amount", 1200), Attr::string("currency", "EUR")]);
//!
//! assert_eq!(
//!     err.to_string(),
//!     "payment declined card=visa amount=1200 currency=EUR",
//! );
//! ```

use smallvec::smallvec;

use crate::attr::{Attr, AttrVec};
use crate::traits::Attributable;

/// Converts a value into a flat attribute list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as error attributes",
    label = "this type does not implement `IntoAttrs`",
    note = "pass an `Attr`, a collection of `Attr`s, or a reference to a type implementing `Attributable`"
)]
pub trait IntoAttrs {
    /// Converts `self` into an [`AttrVec`].
    fn into_attrs(self) -> AttrVec;
}

impl IntoAttrs for Attr {
    /// A single attribute becomes a one-element list.
    #[inline]
    fn into_attrs(self) -> AttrVec {
        smallvec![self]
    }
}

impl IntoAttrs for AttrVec {
    /// Identity conversion (no-op).
    #[inline]
    fn into_attrs(self) -> AttrVec {
        self
    }
}

impl IntoAttrs for Vec<Attr> {
    #[inline]
    fn into_attrs(self) -> AttrVec {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoAttrs for [Attr; N] {
    #[inline]
    fn into_attrs(self) -> AttrVec {
        self.into_iter().collect()
    }
}

impl<T: Attributable + ?Sized> IntoAttrs for &T {
    /// An [`Attributable`] reference splices its own attribute list in place.
    #[inline]
    fn into_attrs(self) -> AttrVec {
        self.attributes()
    }
}
