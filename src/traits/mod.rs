//! Capability traits for the attribute system.
//!
//! - [`Attributable`]: values that contribute their own attribute list
//! - [`IntoAttrs`]: conversion accepted by every attribute argument position
//! - [`Loggable`]: values that build their own log representation
//!
//! # Examples
//!
//! ```
//! use error_braid::{Attr, AttrVec, Attributable, IntoAttrs, StructuredError};
//!
//! struct Job {
//!     queue: &'static str,
//! }
//!
//! impl Attributable for Job {
//!     fn attributes(&self) -> AttrVec {
//!         Attr::string("queue", self.queue).into_attrs()
//!     }
//! }
//!
//! let err = StructuredError::new("job stalled").with_attr(&Job { queue: "mail" });
//! assert_eq!(err.to_string(), "job stalled queue=mail");
//! ```

pub mod attributable;
pub mod into_attrs;
pub mod loggable;

pub use attributable::Attributable;
pub use into_attrs::IntoAttrs;
pub use loggable::Loggable;
