//! package.json parser
//!
//! Handles:
//! - name
//! - dependencies
//! - devDependencies

use super::{DependencyMap, Manifest};
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::Path;

/// Parse a package.json document
///
/// Sections that are absent, or present but not objects, are left as `None`.
/// Entries whose value is not a string are skipped.
pub fn parse_package_json(content: &str, path: &Path) -> Result<Manifest, ManifestError> {
    let json: Value = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

    let root = json
        .as_object()
        .ok_or_else(|| ManifestError::not_an_object(path))?;

    Ok(Manifest {
        name: root.get("name").and_then(Value::as_str).map(str::to_string),
        dependencies: root
            .get("dependencies")
            .and_then(Value::as_object)
            .map(parse_dependency_object),
        dev_dependencies: root
            .get("devDependencies")
            .and_then(Value::as_object)
            .map(parse_dependency_object),
    })
}

fn parse_dependency_object(deps: &Map<String, Value>) -> DependencyMap {
    let mut output = DependencyMap::new();
    for (name, version_value) in deps {
        if let Some(version_str) = version_value.as_str() {
            output.insert(name.clone(), version_str);
        }
    }
    output
}
