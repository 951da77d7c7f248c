//! Structured errors that stay flat for humans and structured for machines.
//!
//! A [`StructuredError`] carries a message, the causes it wraps, and a list
//! of typed key/value attributes. The same value renders three ways:
//!
//! - **Flat text** via `Display`, the composed message followed by
//!   ` key=value` pairs, for contexts that only speak strings.
//! - **Structured fields** via [`logging::log`], which emits the message and
//!   each attribute as a separate `log` key/value pair.
//! - **A category** via [`classify`], mapping the cause chain onto the small
//!   set of outcomes an API boundary distinguishes.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `error_braid::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ```
//! use std::io;
//! use error_braid::{classify, wrap, Attr, Category};
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
//! assert_eq!(classify(&err), Category::Internal);
//! ```

/// Typed attributes and their wire-ready value kinds
pub mod attr;
/// Cause chain traversal with multi-cause fan-out
pub mod chain;
/// Boundary classification of cause chains into categories
pub mod classify;
/// The structured error type and result extensions
pub mod error;
/// Structured log dispatch through the `log` facade
pub mod logging;
/// Construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for attribute carriage and conversion
pub mod traits;

pub use attr::{Attr, AttrValue, AttrVec};
pub use chain::{chain, chain_contains, find_in_chain, Chain};
pub use classify::{classify, Category, NotPermitted};
pub use error::{BoxError, Result, ResultExt, StructuredError};
pub use logging::{fields, log, log_debug, log_error, log_info, log_warn, Field, FieldValue};
pub use traits::{Attributable, IntoAttrs, Loggable};
