//! The in-memory document tree: [`Element`] and [`Attribute`].

use std::collections::VecDeque;

use crate::name::QualifiedName;
use crate::record::RecordType;
use crate::value::Value;

/// Picks the most compact element record type for `prefix`, the way a
/// freshly-constructed element (rather than one parsed off the wire) should
/// be tagged.
pub fn infer_element_type(prefix: &str) -> RecordType {
    let mut chars = prefix.chars();
    match (chars.next(), chars.next()) {
        (None, _) => RecordType::ShortElement,
        (Some(c), None) if c.is_ascii_lowercase() => RecordType::prefix_element(c),
        _ => RecordType::Element,
    }
}

/// Picks the most compact attribute record type for `qname`, handling the
/// `xmlns`/`xmlns:prefix` special case.
pub fn infer_attribute_type(qname: &QualifiedName) -> RecordType {
    if qname.local_name() == "xmlns" {
        return if qname.is_local() {
            RecordType::ShortXmlnsAttribute
        } else {
            RecordType::XmlnsAttribute
        };
    }

    let mut chars = qname.prefix().chars();
    match (chars.next(), chars.next()) {
        (None, _) => RecordType::ShortAttribute,
        (Some(c), None) if c.is_ascii_lowercase() => RecordType::prefix_attribute(c),
        _ => RecordType::Attribute,
    }
}

/// An attribute: a qualified name plus its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub record_type: RecordType,
    pub qname: QualifiedName,
    pub value: Value,
}

impl Attribute {
    /// Builds an attribute, inferring its record type from `qname`.
    pub fn new(qname: QualifiedName, value: Value) -> Self {
        let record_type = infer_attribute_type(&qname);
        Attribute {
            record_type,
            qname,
            value,
        }
    }
}

/// An element: a qualified name, its attributes, children, and value.
///
/// `record_type` is preserved from parsing so a caller can inspect exactly
/// how a non-canonical document was encoded, but the serializer never reads
/// it back — it always recomputes the most compact form from `qname` (see
/// `DESIGN.md`).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub record_type: RecordType,
    pub qname: QualifiedName,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
    pub value: Value,
}

impl Element {
    /// Builds an empty element, inferring its record type from `qname`.
    pub fn new(qname: QualifiedName) -> Self {
        let record_type = infer_element_type(qname.prefix());
        Element {
            record_type,
            qname,
            attributes: Vec::new(),
            children: Vec::new(),
            value: Value::Null,
        }
    }

    /// Returns the first descendant (including `self`) whose name equals
    /// `qname`, searching breadth-first.
    pub fn find_descendant(&self, qname: &QualifiedName) -> Option<&Element> {
        let mut queue: VecDeque<&Element> = VecDeque::new();
        queue.push_back(self);

        while let Some(current) = queue.pop_front() {
            if &current.qname == qname {
                return Some(current);
            }
            queue.extend(current.children.iter());
        }

        None
    }

    /// Returns the first immediate child whose name equals `qname`.
    pub fn first_child(&self, qname: &QualifiedName) -> Option<&Element> {
        self.children.iter().find(|child| &child.qname == qname)
    }
}
