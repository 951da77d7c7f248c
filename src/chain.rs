//! Depth-first traversal over error chains.
//!
//! `std::error::Error::source` only ever exposes one cause per layer, which
//! loses the fan-out of multi-cause errors. [`chain`] walks the full tree
//! instead: structured nodes contribute all of their causes, foreign errors
//! contribute their `source()`, and the visit order is depth-first preorder,
//! left to right.
//!
//! [`chain_contains`] and [`find_in_chain`] are the two questions usually
//! asked of a chain: does a known error value appear anywhere in it, and can
//! a node of a given type be borrowed out of it.
//!
//! # Examples
//!
//! ```
//! use std::io;
//! use error_braid::{chain, StructuredError};
//!
//! let left = StructuredError::wrap("replica a", io::Error::other("disk offline"));
//! let err = StructuredError::wrap_multi(
//!     "flush",
//!     vec![left.into(), io::Error::other("quota exceeded").into()],
//! );
//!
//! // Both branches are visited, parents before children.
//! assert_eq!(chain(&err).count(), 4);
//! ```

use std::error::Error as StdError;
use std::iter::FusedIterator;

use smallvec::{smallvec, SmallVec};

use crate::error::StructuredError;

/// Returns an iterator over `err` and every error reachable beneath it.
///
/// The starting error is yielded first. [`StructuredError`] nodes fan out
/// through all of their causes; any other error is followed through
/// `source()`.
///
/// # Examples
///
/// ```
/// use std::io;
/// use error_braid::{chain, StructuredError};
///
/// let err = StructuredError::wrap("sync", io::Error::other("socket closed"));
/// let texts: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
/// assert_eq!(texts, ["sync: socket closed", "socket closed"]);
/// ```
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain {
        stack: smallvec![err],
    }
}

/// Iterator produced by [`chain`].
#[derive(Debug)]
pub struct Chain<'a> {
    stack: SmallVec<[&'a (dyn StdError + 'static); 4]>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let err = self.stack.pop()?;
        match err.downcast_ref::<StructuredError>() {
            Some(structured) => {
                // Reverse push keeps the pop order left to right.
                for cause in structured.causes().iter().rev() {
                    self.stack.push(&**cause);
                }
            }
            None => {
                if let Some(source) = err.source() {
                    self.stack.push(source);
                }
            }
        }
        Some(err)
    }
}

impl FusedIterator for Chain<'_> {}

/// Reports whether any chain node is a `T` equal to `target`.
///
/// This is the membership test for sentinel errors: wrap a sentinel as deep
/// as you like, the chain still answers.
///
/// # Examples
///
/// ```
/// use error_braid::{chain_contains, NotPermitted, StructuredError};
///
/// let err = StructuredError::wrap("delete account", NotPermitted);
/// assert!(chain_contains(&err, &NotPermitted));
/// ```
pub fn chain_contains<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    chain(err).any(|node| node.downcast_ref::<T>().is_some_and(|node| node == target))
}

/// Returns the first chain node of type `T`, in visit order.
///
/// # Examples
///
/// ```
/// use std::io;
/// use error_braid::{find_in_chain, StructuredError};
///
/// let err = StructuredError::wrap("read index", io::Error::other("disk offline"));
/// let found = find_in_chain::<io::Error>(&err);
/// assert_eq!(found.map(|e| e.to_string()).as_deref(), Some("disk offline"));
/// ```
pub fn find_in_chain<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    chain(err).find_map(|node| node.downcast_ref::<T>())
}
