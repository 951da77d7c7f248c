//! Trait for values that build their own log representation.

/// A value that decides how it appears in logs.
///
/// Implement this for types whose natural `Display` or `Debug` form is wrong
/// for log output, for example secrets that must be redacted or large values
/// that should be summarized. [`Attr::loggable`](crate::Attr::loggable)
/// consumes the representation when building an attribute.
///
/// # Examples
///
/// ```
/// use error_braid::Loggable;
///
/// struct SessionToken(String);
///
/// impl Loggable for SessionToken {
///     fn log_string(&self) -> String {
///         format!("token({} bytes)", self.0.len())
///     }
/// }
///
/// assert_eq!(SessionToken("abc123".into()).log_string(), "token(6 bytes)");
/// ```
pub trait Loggable {
    /// Returns the representation to use in log output.
    fn log_string(&self) -> String;
}
