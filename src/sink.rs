//! The byte sink the serializer writes through.

/// A destination for serialized bytes.
///
/// This is intentionally minimal — a single required method plus a default
/// bulk-append — so that serializing to a `Vec<u8>`, a fixed buffer, or a
/// counting sink all need the same one-line impl.
pub trait ByteSink {
    /// Appends a single byte.
    fn push(&mut self, byte: u8);

    /// Appends a slice of bytes. The default forwards to [`ByteSink::push`];
    /// sinks backed by a growable buffer will usually want to override this
    /// with a single bulk copy.
    fn extend(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }
}

impl ByteSink for Vec<u8> {
    fn push(&mut self, byte: u8) {
        Vec::push(self, byte);
    }

    fn extend(&mut self, bytes: &[u8]) {
        Vec::extend_from_slice(self, bytes);
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn push(&mut self, byte: u8) {
        (**self).push(byte);
    }

    fn extend(&mut self, bytes: &[u8]) {
        (**self).extend(bytes);
    }
}

/// A [`ByteSink`] wrapping an owned `Vec<u8>`, for callers who want a named
/// type rather than writing directly through a bare `Vec<u8>`.
pub struct VecSink(Vec<u8>);

impl VecSink {
    pub fn new() -> Self {
        VecSink(Vec::new())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSink for VecSink {
    delegate::delegate! {
        to self.0 {
            fn push(&mut self, byte: u8);
            fn extend(&mut self, bytes: &[u8]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_forwards_to_inner_vec() {
        let mut sink = VecSink::new();
        sink.push(1);
        sink.extend(&[2, 3, 4]);
        assert_eq!(sink.into_inner(), vec![1, 2, 3, 4]);
    }
}
