//! Loading of the grouped resources document

use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{RestructureError, Result};
use crate::resource::Node;

/// Top-level mapping of group keys (`v1/Pod`, `v1/Pod(related)`, ...) to group values
#[derive(Debug, Clone)]
pub struct GroupedDocument {
    groups: Mapping,
}

impl GroupedDocument {
    /// Groups in source order
    pub fn groups(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

/// Read and parse a grouped document from disk
pub fn load_grouped(path: &Path) -> Result<GroupedDocument> {
    debug!(path = %path.display(), "loading grouped resources");
    let content =
        std::fs::read_to_string(path).map_err(|e| RestructureError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    parse_grouped(&content, &path.display().to_string())
}

/// Parse a grouped document. `origin` names the source in error messages.
pub fn parse_grouped(content: &str, origin: &str) -> Result<GroupedDocument> {
    let parse_failed = |e: serde_yaml::Error| RestructureError::ParseFailed {
        path: origin.to_string(),
        reason: e.to_string(),
    };
    let mut value: Value = serde_yaml::from_str(content).map_err(parse_failed)?;
    // `<<: *anchor` merge keys are resolved before any entry is inspected
    value.apply_merge().map_err(parse_failed)?;

    match Node::classify(&value) {
        Node::Mapping(groups) => Ok(GroupedDocument {
            groups: groups.clone(),
        }),
        other => Err(RestructureError::NotAMapping {
            path: origin.to_string(),
            found: other.describe(),
        }),
    }
}
