//! Flattening of grouped resources into an ordered resource list
//!
//! Each group value is walked as a [`Node`]:
//! - null groups contribute nothing
//! - a sequence is walked entry by entry
//! - a mapping is treated as a single entry
//!
//! An entry with an `items` sequence is a list wrapper and is always unwrapped,
//! even if it carries a `kind` of its own. Anything else without a `kind` is
//! dropped with a warning; malformed fixtures never fail the run.

use serde_yaml::{Mapping, Value};
use tracing::warn;

use crate::loader::GroupedDocument;
use crate::resource::{self, Node, Resource};

/// Resources contributed by one group of the input document
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceGroup {
    /// Group key as written in the input, e.g. `v1/Pod(related)`
    pub key: String,
    pub resources: Vec<Resource>,
    /// Entries skipped for lacking a `kind` or not being mappings
    pub dropped: usize,
}

/// Flatten every group, keeping the per-group breakdown
pub fn flatten_groups(document: &GroupedDocument) -> Vec<ResourceGroup> {
    document
        .groups()
        .map(|(key, value)| flatten_group(group_key(key), value))
        .collect()
}

/// Flatten the whole document into a single ordered resource list
pub fn flatten(document: &GroupedDocument) -> Vec<Resource> {
    flatten_groups(document)
        .into_iter()
        .flat_map(|group| group.resources)
        .collect()
}

fn flatten_group(key: String, value: &Value) -> ResourceGroup {
    let mut group = ResourceGroup {
        key,
        resources: Vec::new(),
        dropped: 0,
    };

    match Node::classify(value) {
        Node::Null => {}
        Node::Sequence(entries) => {
            for entry in entries {
                match Node::classify(entry) {
                    Node::Mapping(entry) => collect_entry(&mut group, entry),
                    other => group.drop_entry(other.describe()),
                }
            }
        }
        Node::Mapping(entry) => collect_entry(&mut group, entry),
        Node::Scalar(_) => group.drop_entry("a scalar group value"),
    }

    group
}

fn collect_entry(group: &mut ResourceGroup, entry: &Mapping) {
    if let Some(items) = resource::list_items(entry) {
        for item in items {
            match Node::classify(item) {
                Node::Mapping(item) => match Resource::from_mapping(item) {
                    Some(found) => group.resources.push(found),
                    None => group.drop_entry("a list item without kind"),
                },
                other => group.drop_entry(other.describe()),
            }
        }
    } else if let Some(found) = Resource::from_mapping(entry) {
        group.resources.push(found);
    } else {
        group.drop_entry("an entry without kind or items");
    }
}

impl ResourceGroup {
    fn drop_entry(&mut self, found: &str) {
        warn!(group = %self.key, found, "skipping entry that is not a resource");
        self.dropped += 1;
    }
}

/// Display form of a group key. Keys are normally strings, but YAML allows any scalar.
fn group_key(key: &Value) -> String {
    resource::scalar_text(key).unwrap_or_else(|| {
        serde_yaml::to_string(key)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default()
    })
}
