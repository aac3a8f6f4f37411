//! Locating and reading package.json files

use super::{parse_package_json, Manifest, MANIFEST_FILENAME};
use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// Resolve a user-supplied project path to a package.json path
///
/// - `.` means the package.json in `cwd`
/// - relative paths are taken from `cwd`
/// - a path that does not name a package.json is treated as a project directory
pub fn resolve_manifest_path(input: &Path, cwd: &Path) -> PathBuf {
    if input == Path::new(".") {
        return cwd.join(MANIFEST_FILENAME);
    }

    let base = if input.is_absolute() {
        input.to_path_buf()
    } else {
        cwd.join(input)
    };

    if input.to_string_lossy().contains(MANIFEST_FILENAME) {
        base
    } else {
        base.join(MANIFEST_FILENAME)
    }
}

/// Read and parse a package.json
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.is_file() {
        return Err(ManifestError::not_found(path));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;

    let manifest = parse_package_json(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        dependencies = manifest.dependencies.as_ref().map_or(0, |d| d.len()),
        dev_dependencies = manifest.dev_dependencies.as_ref().map_or(0, |d| d.len()),
        "loaded manifest"
    );
    Ok(manifest)
}

/// The package.json of the project in `cwd`, if there is one
pub fn find_current_project(cwd: &Path) -> Option<PathBuf> {
    let path = cwd.join(MANIFEST_FILENAME);
    path.is_file().then_some(path)
}

/// Directory a manifest belongs to; installs run there
pub fn project_dir(manifest_path: &Path) -> &Path {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
