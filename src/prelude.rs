//! Convenience re-exports for the common case.
//!
//! Import everything the crate's day-to-day surface needs with one line:
//!
//! ```
//! use error_braid::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`braid!`](crate::braid), [`wrap!`](crate::wrap),
//!   [`wrap_multi!`](crate::wrap_multi)
//! - **Core types**: [`Attr`], [`AttrValue`], [`StructuredError`],
//!   [`BoxError`], [`Result`], [`Category`]
//! - **Traits**: [`Attributable`], [`IntoAttrs`], [`Loggable`], [`ResultExt`]
//! - **Functions**: [`chain`], [`classify`], [`log`] and the per-level
//!   logging helpers
//!
//! # Examples
//!
//! ```
//! use std::io;
//! use error_braid::prelude::*;
//!
//! fn fetch(user: &str) -> Result<String> {
//!     Err(io::Error::other("socket closed"))
//!         .wrap_with("fetch profile", || Attr::string("user", user.to_owned()))
//! }
//!
//! let err = fetch("u-7").unwrap_err();
//! assert_eq!(err.to_string(), "fetch profile: socket closed user=u-7");
//! assert_eq!(classify(&err), Category::Internal);
//! ```

// Macros
pub use crate::{braid, wrap, wrap_multi};

// Core types
pub use crate::attr::{Attr, AttrValue, AttrVec};
pub use crate::classify::{Category, NotPermitted};
pub use crate::error::{BoxError, Result, StructuredError};

// Traits
pub use crate::error::ResultExt;
pub use crate::traits::{Attributable, IntoAttrs, Loggable};

// Functions
pub use crate::chain::{chain, chain_contains, find_in_chain};
pub use crate::classify::classify;
pub use crate::logging::{log, log_debug, log_error, log_info, log_warn};

// Log level, next to the logging helpers that take it.
pub use log::Level;
