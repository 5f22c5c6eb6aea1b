//! Qualified names: a `(prefix, local name)` pair shared by elements and
//! attributes.

use std::hash::{Hash, Hasher};

/// A qualified name: an optional prefix plus a local name.
///
/// Equality is structural over both fields, but [`Hash`] only considers
/// [`QualifiedName::local_name`] — two names with the same local name but
/// different prefixes hash identically. This mirrors the wire format's own
/// indifference to prefixes for most lookup purposes and is a deliberate,
/// inherited quirk rather than an oversight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    prefix: String,
    local_name: String,
}

impl QualifiedName {
    /// Creates a qualified name with no prefix.
    pub fn local(name: impl Into<String>) -> Self {
        QualifiedName {
            prefix: String::new(),
            local_name: name.into(),
        }
    }

    /// Creates a qualified name with both a prefix and a local name.
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        QualifiedName {
            prefix: prefix.into(),
            local_name: name.into(),
        }
    }

    /// The prefix, or the empty string if this name has none.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The local (unprefixed) name.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// `true` if this name has no prefix.
    pub fn is_local(&self) -> bool {
        self.prefix.is_empty()
    }
}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.local_name.hash(state);
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_local() {
            write!(f, "{}", self.local_name)
        } else {
            write!(f, "{}:{}", self.prefix, self.local_name)
        }
    }
}
