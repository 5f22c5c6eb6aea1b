//! Error and result types used throughout this crate.

use std::fmt;

/// The error type used throughout this crate.
///
/// All fallible operations in this crate — parsing a document, writing one,
/// or reading a typed value out of a [`Value`](crate::value::Value) — return
/// a [`Result`] built on this single enum. There is no error-source chaining:
/// this crate has no `Read`/`Write` adapter to propagate I/O errors from, so
/// every variant carries its own context directly (the offending byte, the
/// offset, or the mismatched types).
#[derive(Debug)]
pub enum Error {
    /// A record-type byte was encountered that is not valid in the current
    /// parser state, together with the byte offset it was read from.
    UnexpectedRecord(u8, usize),

    /// The input ended in the middle of a record.
    Truncated,

    /// A `MultiByteInt31` did not terminate within 5 bytes, or decoded to a
    /// value outside `0..=2^31 - 1`.
    MalformedVarint,

    /// A length-prefixed string was not valid UTF-8, at the given byte
    /// offset into the string's payload.
    MalformedUtf8(usize),

    /// A record type is recognized but this crate does not implement
    /// decoding or encoding it.
    Unsupported(u8),

    /// A typed accessor (`as_i64`, `as_str`, ...) was called on a
    /// [`Value`](crate::value::Value) holding a different tag.
    TypeMismatch {
        /// The type the caller asked for.
        expected: &'static str,
        /// The type the value actually holds.
        actual: &'static str,
    },

    /// A second text record was seen for an element that already holds a
    /// value, and the two are not both [`Value::Bytes`](crate::value::Value::Bytes).
    TypeAppendMismatch,

    /// Parsing nested elements beyond the configured
    /// [`ParserOptions::max_depth`](crate::options::ParserOptions::max_depth).
    MaxDepth(usize),

    /// The serializer was asked to write a [`Value`](crate::value::Value)
    /// variant with no wire encoding.
    UnsupportedValueKind(&'static str),

    /// An element or attribute name, once encoded, would exceed the
    /// representable length for any of this format's length prefixes.
    NameTooLong(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedRecord(byte, offset) => {
                write!(f, "unexpected record type 0x{:02X} at offset {}", byte, offset)
            }
            Error::Truncated => write!(f, "input ended in the middle of a record"),
            Error::MalformedVarint => write!(f, "malformed variable-length integer"),
            Error::MalformedUtf8(offset) => {
                write!(f, "invalid UTF-8 at offset {} of string payload", offset)
            }
            Error::Unsupported(byte) => {
                write!(f, "record type 0x{:02X} is recognized but not implemented", byte)
            }
            Error::TypeMismatch { expected, actual } => {
                write!(f, "expected value of type {}, found {}", expected, actual)
            }
            Error::TypeAppendMismatch => {
                write!(f, "a second text record for an element must also be Bytes")
            }
            Error::MaxDepth(max) => write!(f, "element nesting exceeded the configured maximum of {}", max),
            Error::UnsupportedValueKind(kind) => {
                write!(f, "value kind {} has no wire encoding", kind)
            }
            Error::NameTooLong(len) => write!(f, "name of length {} cannot be encoded", len),
        }
    }
}

impl std::error::Error for Error {}

/// Specialized [`Result`](std::result::Result) type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
