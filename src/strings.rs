//! Length-prefixed UTF-8 strings (element/attribute names, xmlns URIs) and
//! the transcoding boundary between wire bytes and Rust `String`s.
//!
//! Every name on the wire is a [`MultiByteInt31`](crate::varint) byte-length
//! followed by that many UTF-8 bytes. This is distinct from the fixed-width
//! `Chars{8,16,32}Text`/`Bytes{8,16,32}Text` records, which carry a `u8`,
//! `u16`, or `u32` length instead — those are decoded directly in the
//! `reader`/`writer` modules since their width is chosen per record, not
//! fixed like a name's.

use crate::error::{Error, Result};
use crate::sink::ByteSink;
use crate::varint;

/// Transcodes between the wire's UTF-8 bytes and Rust `&str`/`String`.
///
/// The default, [`Utf8Transcoder`], is a validating passthrough. This trait
/// exists so a caller whose documents use a different platform encoding can
/// plug in their own conversion without forking the parser; this crate does
/// not ship any non-UTF-8 implementation.
pub trait Transcoder {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<std::borrow::Cow<'a, str>>;
    fn encode<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, [u8]>;
}

/// A [`Transcoder`] that validates UTF-8 and otherwise passes bytes through
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Transcoder;

impl Transcoder for Utf8Transcoder {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<std::borrow::Cow<'a, str>> {
        std::str::from_utf8(bytes)
            .map(std::borrow::Cow::Borrowed)
            .map_err(|e| Error::MalformedUtf8(e.valid_up_to()))
    }

    fn encode<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, [u8]> {
        std::borrow::Cow::Borrowed(text.as_bytes())
    }
}

/// Decodes a `MultiByteInt31`-length-prefixed UTF-8 string from the front of
/// `bytes`, returning the string and the number of bytes consumed
/// (length prefix + payload).
pub fn decode_prefixed_string(bytes: &[u8], transcoder: &impl Transcoder) -> Result<(String, usize)> {
    let (len, prefix_len) = varint::decode_u31(bytes)?;
    let len = len as usize;
    let payload = bytes
        .get(prefix_len..prefix_len + len)
        .ok_or(Error::Truncated)?;
    let text = transcoder.decode(payload)?;
    Ok((text.into_owned(), prefix_len + len))
}

/// Encodes `text` as a `MultiByteInt31`-length-prefixed string, appending to
/// `out`.
pub fn encode_prefixed_string(text: &str, transcoder: &impl Transcoder, out: &mut impl ByteSink) {
    let bytes = transcoder.encode(text);
    varint::encode_u31(bytes.len() as u32, out);
    out.extend(&bytes);
}
