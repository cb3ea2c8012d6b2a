//! Encode/decode pairs for every supported domain type.
//!
//! Each supported type implements [`Codec`] once; dispatch is entirely at
//! compile time, so the set of impls in this module is the codec table.
//! Scalars embed structurally, containers compose element-wise, and the
//! structured types (dates, instants, decimals) go through the parsing
//! helpers in [`crate::temporal`] and the boundary primitives in
//! [`crate::boundary`].

use bigdecimal::BigDecimal;
use bytes::Bytes;
use jiff::civil::Date;
use jiff::Timestamp;
use ordered_float::OrderedFloat;

use crate::boundary;
use crate::error::{DecodeError, Result};
use crate::temporal;
use crate::value::SqlValue;

/// A paired encode/decode for one domain type.
///
/// Encoding is total: every value of an implementing type has a dynamic
/// representation. Decoding is partial: the dynamic value's shape is
/// validated and any mismatch or malformed literal is a [`DecodeError`],
/// never a silent coercion. `decode(encode(v))` returns `Ok(v)` for every
/// supported value.
///
/// Decode takes the value by move so the blob path can hand back the
/// driver-owned buffer without copying it.
pub trait Codec: Sized {
    /// Project the value into the driver's dynamic representation.
    fn encode(&self) -> SqlValue;

    /// Recover a typed value from the driver's dynamic representation.
    fn decode(value: SqlValue) -> Result<Self>;
}

impl Codec for bool {
    fn encode(&self) -> SqlValue {
        SqlValue::Boolean(*self)
    }

    fn decode(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Boolean(b) => Ok(b),
            other => Err(DecodeError::mismatch("Boolean", &other)),
        }
    }
}

impl Codec for i64 {
    fn encode(&self) -> SqlValue {
        SqlValue::Integer(*self)
    }

    fn decode(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Integer(i) => Ok(i),
            other => Err(DecodeError::mismatch("Integer", &other)),
        }
    }
}

impl Codec for f64 {
    fn encode(&self) -> SqlValue {
        SqlValue::Float(OrderedFloat(*self))
    }

    fn decode(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Float(x) => Ok(x.into_inner()),
            other => Err(DecodeError::mismatch("Float", &other)),
        }
    }
}

impl Codec for String {
    fn encode(&self) -> SqlValue {
        SqlValue::Text(self.clone())
    }

    fn decode(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Text(s) => Ok(s),
            other => Err(DecodeError::mismatch("Text", &other)),
        }
    }
}

/// Characters travel as single-character text.
impl Codec for char {
    fn encode(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }

    fn decode(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Text(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(DecodeError::mismatch(
                        "single-character Text",
                        &SqlValue::Text(text),
                    )),
                }
            }
            other => Err(DecodeError::mismatch("single-character Text", &other)),
        }
    }
}

/// Binary blobs pass through the boundary's buffer primitives; the decoded
/// [`Bytes`] shares the driver-owned payload.
impl Codec for Bytes {
    fn encode(&self) -> SqlValue {
        SqlValue::Blob(self.clone())
    }

    fn decode(value: SqlValue) -> Result<Self> {
        if boundary::is_buffer(&value) {
            Ok(boundary::as_buffer(value))
        } else {
            Err(DecodeError::new("not a buffer"))
        }
    }
}

/// Sequences encode element-wise, preserving order. Decode fails on the
/// first element that fails, propagating that element's error verbatim.
impl<T: Codec> Codec for Vec<T> {
    fn encode(&self) -> SqlValue {
        SqlValue::Array(self.iter().map(Codec::encode).collect())
    }

    fn decode(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Array(items) => items.into_iter().map(T::decode).collect(),
            other => Err(DecodeError::mismatch("Array", &other)),
        }
    }
}

/// Absent encodes as the null representation; present defers to the inner
/// codec. Decoding null yields `None`, anything else is decoded as `Some`.
impl<T: Codec> Codec for Option<T> {
    fn encode(&self) -> SqlValue {
        match self {
            Some(inner) => inner.encode(),
            None => boundary::null_value(),
        }
    }

    fn decode(value: SqlValue) -> Result<Self> {
        if boundary::is_null(&value) {
            Ok(None)
        } else {
            T::decode(value).map(Some)
        }
    }
}

impl Codec for Date {
    fn encode(&self) -> SqlValue {
        SqlValue::Text(temporal::format_date(*self))
    }

    fn decode(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Text(text) => temporal::parse_date(&text),
            other => Err(DecodeError::mismatch("Text", &other)),
        }
    }
}

/// Instants are millisecond-epoch values; the driver's own timestamp form
/// is produced and consumed by the boundary formatter/parser pair.
impl Codec for Timestamp {
    fn encode(&self) -> SqlValue {
        boundary::timestamp_value(*self)
    }

    fn decode(value: SqlValue) -> Result<Self> {
        let millis = boundary::timestamp_millis(&value)?;
        Timestamp::from_millisecond(millis).map_err(|_| {
            DecodeError::new(format!(
                "Instant construction failed for given timestamp: {millis}"
            ))
        })
    }
}

/// Decimals always travel as text so no floating-point intermediate can
/// lose precision.
impl Codec for BigDecimal {
    fn encode(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }

    fn decode(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Text(text) => text
                .parse::<BigDecimal>()
                .map_err(|_| DecodeError::new(format!("Decimal literal parsing failed: {text}"))),
            other => Err(DecodeError::mismatch("Text", &other)),
        }
    }
}

/// Identity codec: an escape hatch for callers that want to defer typed
/// interpretation of a column or pass a parameter through untouched.
impl Codec for SqlValue {
    fn encode(&self) -> SqlValue {
        self.clone()
    }

    fn decode(value: SqlValue) -> Result<Self> {
        Ok(value)
    }
}
