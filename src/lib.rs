//! A codec for [MC-NBFX] (.NET Binary Format: XML Data Structure), the
//! compact binary encoding of XML-like documents used by SOAP/WCF
//! transports.
//!
//! ```
//! use nbfx::name::QualifiedName;
//! use nbfx::tree::Element;
//! use nbfx::value::Value;
//!
//! let mut doc = Element::new(QualifiedName::local("doc"));
//! doc.value = Value::from("hello");
//!
//! let bytes = nbfx::write(&doc, Default::default()).unwrap();
//! let parsed = nbfx::read(bytes).unwrap();
//! assert_eq!(parsed.value.as_str().unwrap(), "hello");
//! ```
//!
//! The crate is organized leaves-first: [`record`] and [`varint`] are the
//! shared wire primitives; [`value`], [`name`], and [`tree`] are the
//! in-memory data model; [`reader`] and [`writer`] are the streaming
//! parser/serializer built on top of them.
//!
//! [MC-NBFX]: https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-nbfx/

pub mod datetime;
pub mod error;
pub mod name;
pub mod options;
pub mod reader;
pub mod record;
pub mod sink;
pub mod strings;
pub mod tree;
pub mod value;
pub mod varint;
pub mod writer;

pub use error::{Error, Result};
pub use name::QualifiedName;
pub use options::{ParserOptions, SerializerOptions};
pub use tree::{Attribute, Element};
pub use value::Value;

use sink::ByteSink;

/// Parses a complete MC-NBFX document from `bytes` using the default
/// [`ParserOptions`]. A thin convenience wrapper over
/// [`reader::Parser::parse`] for callers who do not need to configure the
/// parser.
pub fn read<I: IntoIterator<Item = u8>>(bytes: I) -> Result<Element> {
    reader::Parser::default().parse(bytes)
}

/// Serializes `element` to a fresh `Vec<u8>` using `options`. A thin
/// convenience wrapper over [`writer::Writer::write`] for callers who would
/// otherwise write `Writer::new(options).write(element, &mut buf)`
/// boilerplate.
pub fn write(element: &Element, options: SerializerOptions) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    writer::Writer::new(options).write(element, &mut buf)?;
    Ok(buf)
}

/// As [`write`], but appends to a caller-supplied [`ByteSink`] instead of
/// allocating a fresh buffer.
pub fn write_to(element: &Element, options: SerializerOptions, sink: &mut impl ByteSink) -> Result<()> {
    writer::Writer::new(options).write(element, sink)
}
