//! Rendering attributes as structured log fields.
//!
//! The flat `key=value` text form is for humans; this module is for log
//! pipelines. [`fields`] turns an attribute list into typed [`Field`]s, and
//! [`log`] emits a whole error through any [`log::Log`] sink: the composed
//! message becomes the record message and each attribute becomes a key/value
//! pair on the record, preserving kinds instead of flattening everything to
//! one string.
//!
//! The sink is injected per call, so libraries can hand errors to whatever
//! logger their host application wires up.
//!
//! # Examples
//!
//! ```
//! use error_braid::{log_error, Attr, StructuredError};
//!
//! let err = StructuredError::new("sync failed").with_attr(Attr::int("attempt", 3));
//! log_error(log::logger(), &err);
//! ```

use std::error::Error as StdError;
use std::fmt;

use log::kv::{Key, Value, VisitSource};
use log::{Level, Log, Record};

use crate::attr::{Attr, AttrValue};
use crate::error::StructuredError;

/// One attribute rendered for the structured target.
#[derive(Debug)]
pub struct Field<'a> {
    key: &'a str,
    value: FieldValue<'a>,
}

/// The structured rendering of an attribute value.
///
/// String and integer attributes pass through unchanged. Identifiers,
/// timestamps, and error values pre-render to text (canonical UUID form,
/// RFC 3339, and the error's `Display` text respectively). Opaque values stay
/// behind their `Debug` handle so the sink sees the original value.
#[derive(Debug)]
pub enum FieldValue<'a> {
    /// Borrowed text, passed through as a string value.
    Str(&'a str),
    /// Integer, passed through as a numeric value.
    Int(i64),
    /// Owned text rendered from a typed attribute.
    Text(String),
    /// The raw `Debug` handle of an opaque attribute.
    Opaque(&'a dyn fmt::Debug),
}

impl<'a> Field<'a> {
    /// Renders one attribute into its structured form.
    pub fn from_attr(attr: &'a Attr) -> Self {
        let value = match attr.value() {
            AttrValue::Str(value) => FieldValue::Str(value),
            AttrValue::Int(value) => FieldValue::Int(*value),
            AttrValue::Uuid(value) => FieldValue::Text(value.to_string()),
            AttrValue::Time(value) => FieldValue::Text(value.to_rfc3339()),
            AttrValue::Error(value) => FieldValue::Text(value.to_string()),
            AttrValue::Opaque(value) => FieldValue::Opaque(&**value),
        };
        Field {
            key: attr.key(),
            value,
        }
    }

    /// Returns the field key.
    #[inline]
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Returns the rendered value.
    #[inline]
    pub fn value(&self) -> &FieldValue<'a> {
        &self.value
    }
}

/// Renders an attribute list into structured fields, one per attribute.
///
/// # Examples
///
/// ```
/// use error_braid::{fields, Attr, FieldValue};
///
/// let attrs = [Attr::string("region", "eu-west-1"), Attr::int("attempt", 2)];
/// let rendered = fields(&attrs);
///
/// assert_eq!(rendered[0].key(), "region");
/// assert!(matches!(rendered[1].value(), FieldValue::Int(2)));
/// ```
pub fn fields(attrs: &[Attr]) -> Vec<Field<'_>> {
    attrs.iter().map(Field::from_attr).collect()
}

/// Adapter exposing rendered fields as a `log::kv` source.
struct FieldSource<'a> {
    fields: Vec<Field<'a>>,
}

impl log::kv::Source for FieldSource<'_> {
    fn visit<'kvs>(
        &'kvs self,
        visitor: &mut dyn VisitSource<'kvs>,
    ) -> Result<(), log::kv::Error> {
        for field in &self.fields {
            let value = match &field.value {
                FieldValue::Str(value) => Value::from(*value),
                FieldValue::Int(value) => Value::from(*value),
                FieldValue::Text(value) => Value::from(value.as_str()),
                FieldValue::Opaque(value) => Value::from_dyn_debug(*value),
            };
            visitor.visit_pair(Key::from_str(field.key), value)?;
        }
        Ok(())
    }
}

/// Emits `err` through `logger` at `level`.
///
/// A [`StructuredError`] logs its composed message with one key/value pair
/// per attribute. Any other error logs its `Display` text with no pairs, so
/// foreign errors pass through the same entry point.
///
/// # Examples
///
/// ```
/// use error_braid::{log, Attr, StructuredError};
/// use log::Level;
///
/// let err = StructuredError::new("sync failed").with_attr(Attr::int("attempt", 3));
/// log(log::logger(), Level::Warn, &err);
/// ```
pub fn log(logger: &dyn Log, level: Level, err: &(dyn StdError + 'static)) {
    match err.downcast_ref::<StructuredError>() {
        Some(structured) => {
            let message = structured.message();
            let source = FieldSource {
                fields: fields(structured.attrs()),
            };
            logger.log(
                &Record::builder()
                    .args(format_args!("{message}"))
                    .level(level)
                    .target(module_path!())
                    .key_values(&source)
                    .build(),
            );
        }
        None => {
            logger.log(
                &Record::builder()
                    .args(format_args!("{err}"))
                    .level(level)
                    .target(module_path!())
                    .build(),
            );
        }
    }
}

/// Emits `err` at debug level.
#[inline]
pub fn log_debug(logger: &dyn Log, err: &(dyn StdError + 'static)) {
    log(logger, Level::Debug, err);
}

/// Emits `err` at info level.
#[inline]
pub fn log_info(logger: &dyn Log, err: &(dyn StdError + 'static)) {
    log(logger, Level::Info, err);
}

/// Emits `err` at warn level.
#[inline]
pub fn log_warn(logger: &dyn Log, err: &(dyn StdError + 'static)) {
    log(logger, Level::Warn, err);
}

/// Emits `err` at error level.
#[inline]
pub fn log_error(logger: &dyn Log, err: &(dyn StdError + 'static)) {
    log(logger, Level::Error, err);
}
