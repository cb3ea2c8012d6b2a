//! Primitive operations on the driver's dynamic value representation.
//!
//! The codecs in [`crate::codec`] never pattern-match [`SqlValue`] for null,
//! buffer, or timestamp handling themselves; those representation-dependent
//! checks live here. Keeping them in one place means the rest of the crate
//! stays independent of how the driver renders nulls, buffers, and
//! timestamps on the wire.

use bytes::Bytes;
use jiff::Timestamp;

use crate::error::{DecodeError, Result};
use crate::value::SqlValue;

/// True iff `value` is the driver's null representation.
pub fn is_null(value: &SqlValue) -> bool {
    value.is_null()
}

/// Produce the driver's null representation.
pub fn null_value() -> SqlValue {
    SqlValue::Null
}

/// True iff `value` carries an opaque binary buffer.
pub fn is_buffer(value: &SqlValue) -> bool {
    matches!(value, SqlValue::Blob(_))
}

/// Take the buffer out of a value already known to be one.
///
/// The returned [`Bytes`] shares the driver-owned payload; no copy is made.
///
/// # Panics
///
/// Panics if `value` is not a buffer. Callers must check [`is_buffer`]
/// first.
pub fn as_buffer(value: SqlValue) -> Bytes {
    match value {
        SqlValue::Blob(bytes) => bytes,
        other => panic!("as_buffer called on non-buffer value: {other}"),
    }
}

/// Render an instant in the driver's native timestamp form.
///
/// The driver exchanges timestamps as RFC 3339 text.
pub fn timestamp_value(timestamp: Timestamp) -> SqlValue {
    SqlValue::Text(timestamp.to_string())
}

/// Extract a millisecond-epoch value from a driver timestamp.
///
/// Timestamp columns come back either in the driver's integer millisecond
/// form or as RFC 3339 text; both are accepted. Sub-millisecond precision in
/// the text form is truncated, matching the instant's granularity.
pub fn timestamp_millis(value: &SqlValue) -> Result<i64> {
    match value {
        SqlValue::Integer(millis) => Ok(*millis),
        SqlValue::Text(text) => text
            .parse::<Timestamp>()
            .map(|ts| ts.as_millisecond())
            .map_err(|_| DecodeError::new(format!("Timestamp parsing failed for value: {text}"))),
        other => Err(DecodeError::mismatch("a timestamp", other)),
    }
}
