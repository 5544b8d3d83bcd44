//! Multi-document YAML output
//!
//! Documents are separated by a bare `---` line; the first one has no leading
//! separator. Writing is not transactional: a failure partway through leaves
//! a truncated file behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{RestructureError, Result};
use crate::resource::Resource;

/// Line written between two documents
pub const DOCUMENT_SEPARATOR: &str = "---";

/// Serialize one resource in block style, keeping its field order
fn render_document(resource: &Resource) -> Result<String> {
    serde_yaml::to_string(resource.as_mapping()).map_err(|e| RestructureError::SerializeFailed {
        kind: resource.kind(),
        name: resource.name(),
        reason: e.to_string(),
    })
}

/// Stream resources into `out` as a multi-document YAML stream
pub fn write_stream<W: Write>(resources: &[Resource], mut out: W) -> Result<()> {
    for (index, resource) in resources.iter().enumerate() {
        let document = render_document(resource)?;
        if index > 0 {
            writeln!(out, "{DOCUMENT_SEPARATOR}")?;
        }
        out.write_all(document.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Render resources into an in-memory multi-document YAML string
pub fn render_stream(resources: &[Resource]) -> Result<String> {
    let mut buffer = Vec::new();
    write_stream(resources, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| RestructureError::IoError {
        message: e.to_string(),
    })
}

/// Create or truncate `path` and write the stream into it
pub fn write_stream_to_path(resources: &[Resource], path: &Path) -> Result<()> {
    debug!(path = %path.display(), count = resources.len(), "writing resources");
    let write_failed = |reason: String| RestructureError::FileWriteFailed {
        path: path.display().to_string(),
        reason,
    };

    let file = File::create(path).map_err(|e| write_failed(e.to_string()))?;
    write_stream(resources, BufWriter::new(file)).map_err(|e| match e {
        RestructureError::IoError { message } => write_failed(message),
        other => other,
    })
}
