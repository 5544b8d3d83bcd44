//! Kubernetes resource records and the tagged walk over YAML values
//!
//! Grouped input is loosely structured, so every level of the walk is
//! classified into a [`Node`] and matched explicitly.

use serde_yaml::{Mapping, Sequence, Value};

/// Placeholder shown for a missing `kind` or `metadata.name`
pub const UNKNOWN: &str = "Unknown";

const KIND_KEY: &str = "kind";
const ITEMS_KEY: &str = "items";
const METADATA_KEY: &str = "metadata";
const NAME_KEY: &str = "name";

/// Borrowed view of a YAML value, reduced to the shapes the flattener cares about
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Null,
    Sequence(&'a Sequence),
    Mapping(&'a Mapping),
    /// Strings, numbers and booleans
    Scalar(&'a Value),
}

impl<'a> Node<'a> {
    /// Classify a value. Tags are looked through to the tagged value.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Sequence(seq) => Node::Sequence(seq),
            Value::Mapping(map) => Node::Mapping(map),
            Value::Tagged(tagged) => Node::classify(&tagged.value),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Node::Scalar(value),
        }
    }

    /// Human-readable name of the shape, used in diagnostics
    pub fn describe(self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Sequence(_) => "a sequence",
            Node::Mapping(_) => "a mapping",
            Node::Scalar(_) => "a scalar",
        }
    }
}

/// Whether a mapping carries a `kind` key. Presence is enough, even with a null value.
pub fn has_kind(mapping: &Mapping) -> bool {
    mapping.contains_key(KIND_KEY)
}

/// The `items` sequence of a list wrapper, if the mapping is one
pub fn list_items(mapping: &Mapping) -> Option<&Sequence> {
    match Node::classify(mapping.get(ITEMS_KEY)?) {
        Node::Sequence(items) => Some(items),
        _ => None,
    }
}

/// Render a scalar for display, `None` for anything else
pub fn scalar_text(value: &Value) -> Option<String> {
    match Node::classify(value) {
        Node::Scalar(Value::String(s)) => Some(s.clone()),
        Node::Scalar(Value::Number(n)) => Some(n.to_string()),
        Node::Scalar(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// A single Kubernetes resource extracted from the grouped document
///
/// The mapping is kept opaque and in source order; only `kind` and
/// `metadata.name` are ever looked at.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource(Mapping);

impl Resource {
    /// Wrap a mapping that carries a `kind` key
    pub fn from_mapping(mapping: &Mapping) -> Option<Self> {
        has_kind(mapping).then(|| Resource(mapping.clone()))
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// The resource kind, or `Unknown`
    pub fn kind(&self) -> String {
        self.0
            .get(KIND_KEY)
            .and_then(scalar_text)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// The resource `metadata.name`, or `Unknown`
    pub fn name(&self) -> String {
        self.0
            .get(METADATA_KEY)
            .and_then(|metadata| match Node::classify(metadata) {
                Node::Mapping(metadata) => metadata.get(NAME_KEY),
                _ => None,
            })
            .and_then(scalar_text)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}
