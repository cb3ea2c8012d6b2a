use bytes::Bytes;
use ordered_float::OrderedFloat;

/// Dynamic value exchanged with the database driver.
///
/// This is the closed set of wire shapes the driver understands: every query
/// parameter is one of these after encoding, and every column value arrives
/// as one of these before decoding. Codecs treat the enum as opaque apart
/// from the introspection primitives in [`crate::boundary`]; they never
/// invent new shapes.
///
/// Floats are wrapped in [`OrderedFloat`] so the enum is `Eq` and `Hash`,
/// and blobs are reference-counted [`Bytes`] so decoded buffers share the
/// driver-owned payload instead of copying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(OrderedFloat<f64>),
    Text(String),
    Blob(Bytes),
    Array(Vec<SqlValue>),
}

impl SqlValue {
    /// Check if the value is the driver's null representation
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Get the wire-shape name of the value
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "Null",
            SqlValue::Boolean(_) => "Boolean",
            SqlValue::Integer(_) => "Integer",
            SqlValue::Float(_) => "Float",
            SqlValue::Text(_) => "Text",
            SqlValue::Blob(_) => "Blob",
            SqlValue::Array(_) => "Array",
        }
    }
}

/// Compact rendering used in decode diagnostics.
impl std::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlValue::Null => write!(f, "Null"),
            SqlValue::Boolean(b) => write!(f, "Boolean({b})"),
            SqlValue::Integer(i) => write!(f, "Integer({i})"),
            SqlValue::Float(x) => write!(f, "Float({x})"),
            SqlValue::Text(s) => write!(f, "Text({s:?})"),
            SqlValue::Blob(b) => write!(f, "Blob({} bytes)", b.len()),
            SqlValue::Array(items) => {
                write!(f, "Array[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
