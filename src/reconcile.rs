//! Dependency reconciliation between a source and a target manifest
//!
//! A dependency is new when its name is a key of the selected source section
//! and not a key of the same section in the target. Versions are never
//! compared: presence in the target alone disqualifies a dependency.

use crate::domain::{Dependency, DependencyKind, InstallOptions};
use crate::manifest::{DependencyMap, Manifest};
use std::collections::HashSet;

/// Dependencies found in the source but missing from the target
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// Section that was compared
    pub kind: DependencyKind,
    /// New dependency names, in source order
    pub names: Vec<String>,
    /// The source section, verbatim
    pub source_versions: DependencyMap,
}

impl Reconciliation {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// New dependencies paired with their source specifiers
    pub fn dependencies(&self) -> Vec<Dependency> {
        self.names
            .iter()
            .map(|name| {
                let version = self.source_versions.get(name).unwrap_or_default();
                Dependency::new(name.clone(), version, self.kind)
            })
            .collect()
    }
}

/// Compute the dependencies `target` is missing from `source`
///
/// A manifest without the selected section counts as having an empty one.
pub fn reconcile(source: &Manifest, target: &Manifest, options: &InstallOptions) -> Reconciliation {
    let kind = options.dependency_kind();
    let source_versions = source.section(kind).cloned().unwrap_or_default();
    let existing: HashSet<&str> = target
        .section(kind)
        .map(|deps| deps.keys().collect())
        .unwrap_or_default();

    let names = source_versions
        .keys()
        .filter(|name| !existing.contains(name))
        .map(str::to_string)
        .collect();

    Reconciliation {
        kind,
        names,
        source_versions,
    }
}
