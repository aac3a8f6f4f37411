//! package.json loading
//!
//! This module provides functionality to:
//! - Resolve a user-supplied project path to its package.json
//! - Parse the dependency sections of a package.json, keeping key order

mod loader;
mod package_json;

pub use loader::{find_current_project, load_manifest, project_dir, resolve_manifest_path};
pub use package_json::parse_package_json;

use crate::domain::DependencyKind;
use indexmap::IndexMap;

/// File name of an npm package manifest
pub const MANIFEST_FILENAME: &str = "package.json";

/// Insertion-ordered mapping from dependency name to version specifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: IndexMap<String, String>,
}

impl DependencyMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry; a new name goes to the end
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.entries.insert(name.into(), version.into());
    }

    /// Version specifier for a dependency
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns true if the dependency is listed
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Dependency names in manifest order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, version)| (name.into(), version.into()))
                .collect(),
        }
    }
}

/// The parts of a package.json this tool cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Package name, when declared
    pub name: Option<String>,
    /// `dependencies`
    pub dependencies: Option<DependencyMap>,
    /// `devDependencies`
    pub dev_dependencies: Option<DependencyMap>,
}

impl Manifest {
    /// Sets `dependencies` (builder pattern)
    pub fn with_dependencies<K, V>(mut self, deps: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.dependencies = Some(deps.into_iter().collect());
        self
    }

    /// Sets `devDependencies` (builder pattern)
    pub fn with_dev_dependencies<K, V>(mut self, deps: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.dev_dependencies = Some(deps.into_iter().collect());
        self
    }

    /// The dependency section for a kind, if the manifest declares it
    pub fn section(&self, kind: DependencyKind) -> Option<&DependencyMap> {
        match kind {
            DependencyKind::Production => self.dependencies.as_ref(),
            DependencyKind::Development => self.dev_dependencies.as_ref(),
        }
    }
}
