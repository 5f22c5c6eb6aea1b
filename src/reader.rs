//! A module to handle reading MC-NBFX documents.

use std::fmt;

use crate::error::{Error, Result};
use crate::name::QualifiedName;
use crate::options::ParserOptions;
use crate::record::RecordType;
use crate::strings::{Transcoder, Utf8Transcoder};
use crate::tree::{Attribute, Element};
use crate::value::Value;
use crate::varint;

/// A forward-only, single-byte-at-a-time view over a byte source, tracking
/// the offset used to annotate [`Error::UnexpectedRecord`].
struct Cursor<I: Iterator<Item = u8>> {
    inner: I,
    position: usize,
}

impl<I: Iterator<Item = u8>> Cursor<I> {
    fn new(inner: I) -> Self {
        Cursor { inner, position: 0 }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn read_u8(&mut self) -> Result<u8> {
        let byte = self.inner.next().ok_or(Error::Truncated)?;
        self.position += 1;
        Ok(byte)
    }

    fn read_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len);
        for _ in 0..len {
            buf.push(self.read_u8()?);
        }
        Ok(buf)
    }

    fn read_u16_le(&mut self) -> Result<u16> {
        let bytes = self.read_exact(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.read_exact(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u64_le(&mut self) -> Result<u64> {
        let bytes = self.read_exact(8)?;
        let mut array = [0u8; 8];
        array.copy_from_slice(&bytes);
        Ok(u64::from_le_bytes(array))
    }

    /// Reads a `MultiByteInt31` and returns its value.
    fn read_varint(&mut self) -> Result<u32> {
        // `decode_u31` wants the whole buffer up front; a record's varint is
        // never more than 5 bytes, so buffering that much here is cheap and
        // keeps the codec itself allocation-free of iterator machinery.
        let mut buf = [0u8; 5];
        let mut len = 0;
        loop {
            let byte = self.read_u8()?;
            buf[len] = byte;
            len += 1;
            if byte & 0x80 == 0 || len == buf.len() {
                break;
            }
        }
        let (value, consumed) = varint::decode_u31(&buf[..len])?;
        debug_assert_eq!(consumed, len);
        Ok(value)
    }

    fn read_name_string(&mut self, transcoder: &impl Transcoder) -> Result<String> {
        let len = self.read_varint()? as usize;
        let bytes = self.read_exact(len)?;
        let text = transcoder.decode(&bytes)?;
        Ok(text.into_owned())
    }

    fn read_dictionary_string(&mut self) -> Result<String> {
        let id = self.read_varint()?;
        Ok(format!("D:{}", id))
    }
}

/// Streaming decoder for MC-NBFX documents.
///
/// A [`Parser`] is stateless between calls: all per-document state (the open
/// element stack) lives on the call stack of [`Parser::parse`] itself, so a
/// single `Parser` can be reused, or shared across threads, for any number
/// of independent parses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    pub fn new(options: ParserOptions) -> Self {
        Parser { options }
    }

    /// Parses a complete document from `input`, returning its root element.
    ///
    /// `input` is consumed up to and including the final `EndElement` byte
    /// that closes the root; any trailing bytes in `input` beyond that point
    /// are left unread.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedRecord`] if the first byte is not a valid
    /// element record, [`Error::Truncated`] if the input ends mid-record,
    /// and the other [`Error`] variants for the malformed-input cases they
    /// each document.
    ///
    /// ```
    /// # use nbfx::reader::Parser;
    /// let bytes = [0x40, 0x03, b'd', b'o', b'c', 0x01];
    /// let doc = Parser::default().parse(bytes).unwrap();
    /// assert_eq!(doc.qname.local_name(), "doc");
    /// ```
    pub fn parse<I: IntoIterator<Item = u8>>(&self, input: I) -> Result<Element> {
        let mut cursor = Cursor::new(input.into_iter());
        let transcoder = Utf8Transcoder;
        let mut stack: Vec<Element> = Vec::new();

        loop {
            let offset = cursor.position();
            let byte = cursor.read_u8()?;
            let record_type = RecordType::from_u8(byte);

            // Mirrors the original parser's up-front `IsElement` check: with
            // no element open, only another element record can legally
            // appear. This also rules out an empty stack ever reaching
            // `close_top` below.
            if stack.is_empty() && !record_type.is_element() {
                return Err(Error::UnexpectedRecord(byte, offset));
            }

            if record_type.is_element() {
                if stack.len() >= self.options.get_max_depth() {
                    return Err(Error::MaxDepth(self.options.get_max_depth()));
                }
                let element = self.parse_element_header(record_type, &mut cursor, &transcoder)?;
                stack.push(element);
                continue;
            }

            if record_type.is_attribute() {
                let attribute = self.parse_attribute(record_type, &mut cursor, &transcoder)?;
                let top = stack.last_mut().ok_or(Error::UnexpectedRecord(byte, offset))?;
                top.attributes.push(attribute);
                continue;
            }

            if record_type.is_text_record() {
                let (value, with_end) = self.parse_text_value(record_type, &mut cursor)?;
                {
                    let top = stack.last_mut().ok_or(Error::UnexpectedRecord(byte, offset))?;
                    apply_value(top, value)?;
                }
                if with_end {
                    if let Some(root) = close_top(&mut stack) {
                        return Ok(root);
                    }
                }
                continue;
            }

            if record_type.code() == RecordType::EndElement.code() {
                if stack.is_empty() {
                    return Err(Error::UnexpectedRecord(byte, offset));
                }
                if let Some(root) = close_top(&mut stack) {
                    return Ok(root);
                }
                continue;
            }

            return Err(Error::UnexpectedRecord(byte, offset));
        }
    }

    fn parse_element_header<I: Iterator<Item = u8>>(
        &self,
        record_type: RecordType,
        cursor: &mut Cursor<I>,
        transcoder: &impl Transcoder,
    ) -> Result<Element> {
        let (prefix, name) = match record_type {
            RecordType::ShortElement => (String::new(), cursor.read_name_string(transcoder)?),
            RecordType::Element => {
                let prefix = cursor.read_name_string(transcoder)?;
                let name = cursor.read_name_string(transcoder)?;
                (prefix, name)
            }
            RecordType::ShortDictionaryElement => (String::new(), cursor.read_dictionary_string()?),
            RecordType::DictionaryElement => {
                let prefix = cursor.read_name_string(transcoder)?;
                let name = cursor.read_dictionary_string()?;
                (prefix, name)
            }
            other => {
                if let Some(letter) = other.dictionary_element_prefix_letter() {
                    (letter.to_string(), cursor.read_dictionary_string()?)
                } else if let Some(letter) = other.element_prefix_letter() {
                    (letter.to_string(), cursor.read_name_string(transcoder)?)
                } else {
                    unreachable!("record_type.is_element() guarantees one of the arms above");
                }
            }
        };

        Ok(Element {
            record_type,
            qname: QualifiedName::new(prefix, name),
            attributes: Vec::new(),
            children: Vec::new(),
            value: Value::Null,
        })
    }

    fn parse_attribute<I: Iterator<Item = u8>>(
        &self,
        record_type: RecordType,
        cursor: &mut Cursor<I>,
        transcoder: &impl Transcoder,
    ) -> Result<Attribute> {
        use RecordType::*;

        let code = record_type.code();
        let is_xmlns = matches!(
            record_type,
            ShortXmlnsAttribute | XmlnsAttribute | ShortDictionaryXmlnsAttribute | DictionaryXmlnsAttribute
        );
        let is_dictionary = matches!(record_type, ShortDictionaryAttribute | DictionaryAttribute)
            || is_xmlns && (code == ShortDictionaryXmlnsAttribute.code() || code == DictionaryXmlnsAttribute.code())
            || record_type.dictionary_attribute_prefix_letter().is_some();
        let prefixed = matches!(record_type, Attribute | DictionaryAttribute | XmlnsAttribute | DictionaryXmlnsAttribute);

        let prefix = if prefixed {
            cursor.read_name_string(transcoder)?
        } else if let Some(letter) = record_type.dictionary_attribute_prefix_letter() {
            letter.to_string()
        } else if let Some(letter) = record_type.attribute_prefix_letter() {
            letter.to_string()
        } else {
            String::new()
        };

        let (name, value) = if is_xmlns {
            let uri = if is_dictionary {
                cursor.read_dictionary_string()?
            } else {
                cursor.read_name_string(transcoder)?
            };
            ("xmlns".to_string(), Value::String(uri))
        } else {
            let name = if is_dictionary {
                cursor.read_dictionary_string()?
            } else {
                cursor.read_name_string(transcoder)?
            };
            let text_byte = cursor.read_u8()?;
            let text_type = RecordType::from_u8(text_byte);
            let (value, _with_end) = self.parse_text_value(text_type, cursor)?;
            (name, value)
        };

        Ok(Attribute {
            record_type,
            qname: QualifiedName::new(prefix, name),
            value,
        })
    }

    /// Decodes one text record, returning its value and whether its
    /// low bit marked it as implicitly closing the enclosing element.
    fn parse_text_value<I: Iterator<Item = u8>>(
        &self,
        record_type: RecordType,
        cursor: &mut Cursor<I>,
    ) -> Result<(Value, bool)> {
        let with_end = record_type.has_implicit_end_element();
        let canonical = record_type.canonical_text_code();

        let value = match RecordType::from_u8(canonical) {
            RecordType::ZeroText => Value::Int64(0),
            RecordType::OneText => Value::Int64(1),
            RecordType::FalseText => Value::Boolean(false),
            RecordType::TrueText => Value::Boolean(true),
            RecordType::Int8Text => Value::Int64(cursor.read_u8()? as i8 as i64),
            RecordType::Int16Text => Value::Int64(cursor.read_u16_le()? as i16 as i64),
            RecordType::Int32Text => Value::Int64(cursor.read_u32_le()? as i32 as i64),
            RecordType::Int64Text => Value::Int64(cursor.read_u64_le()? as i64),
            RecordType::UInt64Text => Value::UInt64(cursor.read_u64_le()?),
            RecordType::FloatText => Value::Float32(f32::from_bits(cursor.read_u32_le()?)),
            RecordType::DoubleText => Value::Float64(f64::from_bits(cursor.read_u64_le()?)),
            RecordType::DateTimeText => {
                let raw = cursor.read_u64_le()?;
                let (_tz, nanos) = crate::datetime::decode(raw);
                Value::DateTime(nanos)
            }
            RecordType::Chars8Text => {
                let len = cursor.read_u8()? as usize;
                Value::String(decode_bytes_as_string(cursor.read_exact(len)?)?)
            }
            RecordType::Chars16Text => {
                let len = cursor.read_u16_le()? as usize;
                Value::String(decode_bytes_as_string(cursor.read_exact(len)?)?)
            }
            RecordType::Chars32Text => {
                let len = cursor.read_u32_le()? as usize;
                Value::String(decode_bytes_as_string(cursor.read_exact(len)?)?)
            }
            RecordType::Bytes8Text => {
                let len = cursor.read_u8()? as usize;
                Value::Bytes(cursor.read_exact(len)?)
            }
            RecordType::Bytes16Text => {
                let len = cursor.read_u16_le()? as usize;
                Value::Bytes(cursor.read_exact(len)?)
            }
            RecordType::Bytes32Text => {
                let len = cursor.read_u32_le()? as usize;
                Value::Bytes(cursor.read_exact(len)?)
            }
            RecordType::EmptyText => Value::Null,
            RecordType::DictionaryText => Value::String(cursor.read_dictionary_string()?),
            other => return Err(Error::Unsupported(other.code())),
        };

        Ok((value, with_end))
    }
}

fn decode_bytes_as_string(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::MalformedUtf8(e.utf8_error().valid_up_to()))
}

/// Applies a decoded text-record value to `element`, handling the
/// documented bytes-chunk-append peculiarity.
fn apply_value(element: &mut Element, value: Value) -> Result<()> {
    let continues_bytes_chunk = matches!(&element.value, Value::Bytes(existing) if !existing.is_empty());

    if continues_bytes_chunk {
        match value {
            Value::Bytes(more) => element.value.append_bytes(more),
            _ => Err(Error::TypeAppendMismatch),
        }
    } else {
        element.value = value;
        Ok(())
    }
}

/// Pops the top of `stack`. If the stack becomes empty, the popped element
/// is the completed document root and is returned; otherwise it is appended
/// to the new top's children and `None` is returned.
///
/// Every call site checks `stack.is_empty()` before calling this, so `pop`
/// never actually fails here; `None` is still the correct, non-panicking
/// fallback if that ever stops being true.
fn close_top(stack: &mut Vec<Element>) -> Option<Element> {
    let closed = match stack.pop() {
        Some(closed) => closed,
        None => return None,
    };
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(closed);
            None
        }
        None => Some(closed),
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parser(max_depth={})", self.options.get_max_depth())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qn(local: &str) -> QualifiedName {
        QualifiedName::local(local)
    }

    #[test]
    fn parses_short_element_with_no_children() {
        let bytes = [0x40, 0x03, b'd', b'o', b'c', 0x01];
        let doc = Parser::default().parse(bytes).unwrap();
        assert_eq!(doc.qname, qn("doc"));
        assert!(doc.attributes.is_empty());
        assert!(doc.children.is_empty());
        assert!(doc.value.is_null());
    }

    #[test]
    fn parses_prefixed_element() {
        let bytes = [0x41, 0x03, b'p', b'r', b'e', 0x03, b'd', b'o', b'c', 0x01];
        let doc = Parser::default().parse(bytes).unwrap();
        assert_eq!(doc.qname, QualifiedName::new("pre", "doc"));
    }

    #[test]
    fn parses_lettered_prefix_element() {
        // PrefixElementS (0x70) + "MyMessage"
        let mut bytes = vec![0x70, 0x09];
        bytes.extend_from_slice(b"MyMessage");
        bytes.push(0x01);
        let doc = Parser::default().parse(bytes).unwrap();
        assert_eq!(doc.qname, QualifiedName::new("s", "MyMessage"));
    }

    #[test]
    fn parses_short_attribute_with_boolean_value() {
        // <doc attr=false/>
        let mut bytes = vec![0x40, 0x03];
        bytes.extend_from_slice(b"doc");
        bytes.push(0x04); // ShortAttribute
        bytes.push(0x04);
        bytes.extend_from_slice(b"attr");
        bytes.push(0x84); // FalseText
        bytes.push(0x01); // EndElement
        let doc = Parser::default().parse(bytes).unwrap();
        assert_eq!(doc.attributes.len(), 1);
        assert_eq!(doc.attributes[0].qname, qn("attr"));
        assert_eq!(doc.attributes[0].value.as_bool().unwrap(), false);
    }

    #[test]
    fn parses_xmlns_attribute_with_prefix() {
        let mut bytes = vec![0x09, 0x03]; // XmlnsAttribute, prefix len 3
        bytes.extend_from_slice(b"pre");
        bytes.push(0x0A); // uri len 10
        bytes.extend_from_slice(b"http://abc");
        bytes.push(0x01); // EndElement for the surrounding synthetic element
        // wrap in a ShortElement so the attribute has somewhere to attach
        let mut doc_bytes = vec![0x40, 0x03];
        doc_bytes.extend_from_slice(b"doc");
        doc_bytes.extend_from_slice(&bytes);
        let doc = Parser::default().parse(doc_bytes).unwrap();
        let attr = &doc.attributes[0];
        assert_eq!(attr.qname, QualifiedName::new("pre", "xmlns"));
        assert_eq!(attr.value.as_str().unwrap(), "http://abc");
    }

    #[test]
    fn text_record_with_end_element_closes_its_element() {
        // ShortElement "doc" + Bytes8TextWithEndElement over 8 bytes, no
        // trailing EndElement byte.
        let mut bytes = vec![0x40, 0x03];
        bytes.extend_from_slice(b"doc");
        bytes.push(0x9F); // Bytes8TextWithEndElement
        bytes.push(0x08);
        bytes.extend_from_slice(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let doc = Parser::default().parse(bytes).unwrap();
        assert_eq!(doc.value.as_bytes().unwrap(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn second_bytes_chunk_appends() {
        let mut bytes = vec![0x40, 0x03];
        bytes.extend_from_slice(b"doc");
        bytes.push(0x9E); // Bytes8Text
        bytes.push(0x02);
        bytes.extend_from_slice(&[1, 2]);
        bytes.push(0x9F); // Bytes8TextWithEndElement
        bytes.push(0x02);
        bytes.extend_from_slice(&[3, 4]);
        let doc = Parser::default().parse(bytes).unwrap();
        assert_eq!(doc.value.as_bytes().unwrap(), &[1, 2, 3, 4]);
    }

    #[test]
    fn mismatched_second_chunk_is_an_error() {
        let mut bytes = vec![0x40, 0x03];
        bytes.extend_from_slice(b"doc");
        bytes.push(0x9E); // Bytes8Text
        bytes.push(0x01);
        bytes.push(42);
        bytes.push(0x82); // OneText, not Bytes
        bytes.push(0x01); // EndElement
        let err = Parser::default().parse(bytes).unwrap_err();
        assert!(matches!(err, Error::TypeAppendMismatch));
    }

    #[test]
    fn integer_widths_round_trip() {
        let bytes = [0x40, 0x01, b'x', 0x8A, 0xFF, 0x7F, 0x01]; // Int16Text 32767
        let doc = Parser::default().parse(bytes).unwrap();
        assert_eq!(doc.value.as_i64().unwrap(), 32767);
    }

    #[test]
    fn unexpected_leading_byte_is_an_error() {
        let bytes = [0x01];
        let err = Parser::default().parse(bytes).unwrap_err();
        assert!(matches!(err, Error::UnexpectedRecord(0x01, 0)));
    }

    #[test]
    fn bare_attribute_as_leading_byte_is_an_error() {
        // ShortAttribute (0x04) with no open element to attach to.
        let bytes = [0x04];
        let err = Parser::default().parse(bytes).unwrap_err();
        assert!(matches!(err, Error::UnexpectedRecord(0x04, 0)));
    }

    #[test]
    fn max_depth_is_enforced() {
        let options = ParserOptions::new().max_depth(1);
        let mut bytes = vec![0x40, 0x01, b'a', 0x40, 0x01, b'b', 0x01, 0x01];
        let err = Parser::new(options).parse(bytes.drain(..).collect::<Vec<_>>()).unwrap_err();
        assert!(matches!(err, Error::MaxDepth(1)));
    }
}
