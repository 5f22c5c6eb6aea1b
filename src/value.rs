//! The value carried by a text record: the tagged union attached to an
//! element or attribute.

use crate::error::{Error, Result};

/// A decoded (or to-be-encoded) text-record payload.
///
/// Each variant corresponds to one or more [`RecordType`](crate::record::RecordType)
/// text codes; see the module-level parser/serializer documentation for the
/// mapping. `Float32` and `Float64` are kept as distinct variants — the
/// reference implementation this format was distilled from conflates them in
/// one accessor, which this crate deliberately does not reproduce.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No text record at all (`EmptyText`, or no value present).
    Null,
    Boolean(bool),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    /// Nanoseconds since the Unix epoch. See the `datetime` module for the
    /// wire-tick conversion.
    DateTime(i64),
    /// Decoded string payload. A dictionary-string reference surfaces here
    /// as the literal token `"D:<id>"`; see the crate-level documentation.
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Int64(_) => "Int64",
            Value::UInt64(_) => "UInt64",
            Value::Float32(_) => "Float32",
            Value::Float64(_) => "Float64",
            Value::DateTime(_) => "DateTime",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    /// `true` if this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch("Boolean")),
        }
    }

    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Value::Int64(v) => Ok(*v),
            other => Err(other.mismatch("Int64")),
        }
    }

    pub fn as_u64(&self) -> Result<u64> {
        match self {
            Value::UInt64(v) => Ok(*v),
            other => Err(other.mismatch("UInt64")),
        }
    }

    pub fn as_f32(&self) -> Result<f32> {
        match self {
            Value::Float32(v) => Ok(*v),
            other => Err(other.mismatch("Float32")),
        }
    }

    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Value::Float64(v) => Ok(*v),
            other => Err(other.mismatch("Float64")),
        }
    }

    /// Nanoseconds since the Unix epoch.
    pub fn as_datetime(&self) -> Result<i64> {
        match self {
            Value::DateTime(v) => Ok(*v),
            other => Err(other.mismatch("DateTime")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(other.mismatch("String")),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8]> {
        match self {
            Value::Bytes(b) => Ok(b.as_slice()),
            other => Err(other.mismatch("Bytes")),
        }
    }

    /// Appends `more` to a [`Value::Bytes`], the wire format's documented
    /// chunked-bytes behavior. Fails with [`Error::TypeAppendMismatch`] if
    /// either side is not `Bytes`.
    pub fn append_bytes(&mut self, more: Vec<u8>) -> Result<()> {
        match self {
            Value::Bytes(existing) => {
                existing.extend(more);
                Ok(())
            }
            other => Err(Error::TypeMismatch {
                expected: "Bytes",
                actual: other.kind(),
            }),
        }
    }

    /// A lossy human-readable rendering, used by tests and diagnostics — not
    /// part of the wire contract.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Boolean(b) => b.to_string(),
            Value::Int64(v) => v.to_string(),
            Value::UInt64(v) => v.to_string(),
            Value::Float32(v) => v.to_string(),
            Value::Float64(v) => v.to_string(),
            Value::DateTime(v) => v.to_string(),
            Value::String(s) => s.clone(),
            Value::Bytes(b) => b
                .iter()
                .map(|byte| format!("{:02X}", byte))
                .collect::<String>(),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}
