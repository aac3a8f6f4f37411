//! Dependency information structures

use super::DependencyKind;
use serde::{Deserialize, Serialize};

/// A package dependency as written in package.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Version specifier, verbatim (e.g. `^1.2.3`, `~4.0.0`, `latest`)
    pub version: String,
    /// Manifest section the dependency belongs to
    #[serde(skip)]
    pub kind: DependencyKind,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, version: impl Into<String>, kind: DependencyKind) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind,
        }
    }

    /// Creates a new production dependency
    pub fn production(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, version, DependencyKind::Production)
    }

    /// Creates a new development dependency
    pub fn development(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, version, DependencyKind::Development)
    }
}
