//! Serializing a document tree back to MC-NBFX bytes.

use crate::datetime;
use crate::error::{Error, Result};
use crate::options::SerializerOptions;
use crate::record::RecordType;
use crate::sink::ByteSink;
use crate::strings::{encode_prefixed_string, Utf8Transcoder};
use crate::tree::{infer_attribute_type, Attribute, Element};
use crate::value::Value;

/// Streaming encoder for MC-NBFX documents.
///
/// Like [`Parser`](crate::reader::Parser), a [`Writer`] holds only
/// configuration — all per-document state lives on the call stack of
/// [`Writer::write`], so one `Writer` can serialize any number of documents,
/// from any number of threads, concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Writer {
    options: SerializerOptions,
}

impl Writer {
    pub fn new(options: SerializerOptions) -> Self {
        Writer { options }
    }

    /// Serializes `root` to `sink`.
    ///
    /// The element's own `record_type` field is ignored: this always
    /// recomputes the most compact element/attribute codes from each name's
    /// `(prefix, local_name)`, so `write(parse(write(root)))` reproduces
    /// `write(root)` byte-for-byte even when `root` was built by hand with a
    /// non-canonical `record_type`.
    ///
    /// ```
    /// # use nbfx::name::QualifiedName;
    /// # use nbfx::tree::Element;
    /// # use nbfx::writer::Writer;
    /// let doc = Element::new(QualifiedName::local("doc"));
    /// let mut bytes = Vec::new();
    /// Writer::default().write(&doc, &mut bytes).unwrap();
    /// assert_eq!(bytes, vec![0x40, 0x03, b'd', b'o', b'c', 0x01]);
    /// ```
    pub fn write(&self, root: &Element, sink: &mut impl ByteSink) -> Result<()> {
        self.write_element(root, sink, self.options.get_sort_members())
    }

    fn write_element(&self, element: &Element, sink: &mut impl ByteSink, sort_members: bool) -> Result<()> {
        write_element_header(element.qname.prefix(), element.qname.local_name(), sink);

        for attribute in &element.attributes {
            write_attribute(attribute, sink)?;
        }

        if sort_members {
            let mut children: Vec<&Element> = element.children.iter().collect();
            children.sort_by(|a, b| a.qname.local_name().cmp(b.qname.local_name()));
            for child in children {
                self.write_element(child, sink, true)?;
            }
        } else {
            for child in &element.children {
                self.write_element(child, sink, false)?;
            }
        }

        write_value(&element.value, true, sink)
    }
}

fn write_name(name: &str, sink: &mut impl ByteSink) {
    encode_prefixed_string(name, &Utf8Transcoder, sink);
}

fn write_element_header(prefix: &str, name: &str, sink: &mut impl ByteSink) {
    let mut chars = prefix.chars();
    match (chars.next(), chars.next()) {
        (None, _) => {
            sink.push(RecordType::ShortElement.code());
            write_name(name, sink);
        }
        (Some(letter), None) if letter.is_ascii_lowercase() => {
            sink.push(RecordType::prefix_element(letter).code());
            write_name(name, sink);
        }
        _ => {
            sink.push(RecordType::Element.code());
            write_name(prefix, sink);
            write_name(name, sink);
        }
    }
}

fn write_attribute(attribute: &Attribute, sink: &mut impl ByteSink) -> Result<()> {
    let record_type = infer_attribute_type(&attribute.qname);
    let prefix = attribute.qname.prefix();

    if attribute.qname.local_name() == "xmlns" {
        let uri = attribute.value.as_str()?;
        if record_type == RecordType::XmlnsAttribute {
            sink.push(RecordType::XmlnsAttribute.code());
            write_name(prefix, sink);
            write_name(uri, sink);
        } else {
            sink.push(RecordType::ShortXmlnsAttribute.code());
            write_name(uri, sink);
        }
        return Ok(());
    }

    let mut chars = prefix.chars();
    match (chars.next(), chars.next()) {
        (None, _) => {
            sink.push(RecordType::ShortAttribute.code());
            write_name(attribute.qname.local_name(), sink);
        }
        (Some(letter), None) if letter.is_ascii_lowercase() => {
            sink.push(RecordType::prefix_attribute(letter).code());
            write_name(attribute.qname.local_name(), sink);
        }
        _ => {
            sink.push(RecordType::Attribute.code());
            write_name(prefix, sink);
            write_name(attribute.qname.local_name(), sink);
        }
    }

    write_value(&attribute.value, false, sink)
}

fn write_value(value: &Value, with_end: bool, sink: &mut impl ByteSink) -> Result<()> {
    let end_bit = with_end as u8;

    match value {
        Value::Null => {
            if with_end {
                sink.push(RecordType::EndElement.code());
            }
            Ok(())
        }
        Value::Boolean(b) => {
            sink.push(if *b { 0x86 } else { 0x84 } + end_bit);
            Ok(())
        }
        Value::Int64(v) => {
            write_int(*v, end_bit, sink);
            Ok(())
        }
        Value::UInt64(v) => {
            sink.push(0xB2 + end_bit);
            sink.extend(&v.to_le_bytes());
            Ok(())
        }
        Value::Float32(v) => {
            sink.push(0x90 + end_bit);
            sink.extend(&v.to_bits().to_le_bytes());
            Ok(())
        }
        Value::Float64(v) => {
            sink.push(0x92 + end_bit);
            sink.extend(&v.to_bits().to_le_bytes());
            Ok(())
        }
        Value::DateTime(nanos) => {
            sink.push(0x96 + end_bit);
            sink.extend(&datetime::encode(*nanos).to_le_bytes());
            Ok(())
        }
        Value::String(s) => {
            write_length_prefixed_chunk(0x98, s.as_bytes(), end_bit, sink);
            Ok(())
        }
        Value::Bytes(b) => {
            write_length_prefixed_chunk(0x9E, b, end_bit, sink);
            Ok(())
        }
    }
}

/// Picks the narrowest of Int8/Int16/Int32/Int64 that faithfully
/// round-trips `v` and writes that record.
fn write_int(v: i64, end_bit: u8, sink: &mut impl ByteSink) {
    if let Ok(v) = i8::try_from(v) {
        sink.push(0x88 + end_bit);
        sink.push(v as u8);
    } else if let Ok(v) = i16::try_from(v) {
        sink.push(0x8A + end_bit);
        sink.extend(&v.to_le_bytes());
    } else if let Ok(v) = i32::try_from(v) {
        sink.push(0x8C + end_bit);
        sink.extend(&v.to_le_bytes());
    } else {
        sink.push(0x8E + end_bit);
        sink.extend(&v.to_le_bytes());
    }
}

/// Picks the narrowest 8/16/32-bit length prefix for `payload` and writes
/// `base_code` (the 8-bit-width record) shifted to the chosen width, plus
/// the payload itself. `base_code` must be one of the `Chars8Text`/
/// `Bytes8Text` family, whose 16- and 32-bit siblings sit 2 and 4 codes
/// later respectively.
fn write_length_prefixed_chunk(base_code: u8, payload: &[u8], end_bit: u8, sink: &mut impl ByteSink) {
    let len = payload.len();
    if len <= 0xFF {
        sink.push(base_code + end_bit);
        sink.push(len as u8);
    } else if len <= 0xFFFF {
        sink.push(base_code + 2 + end_bit);
        sink.extend(&(len as u16).to_le_bytes());
    } else {
        sink.push(base_code + 4 + end_bit);
        sink.extend(&(len as u32).to_le_bytes());
    }
    sink.extend(payload);
}
