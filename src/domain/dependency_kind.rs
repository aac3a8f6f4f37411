//! Dependency kind definitions for package.json sections

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which dependency section of a manifest is being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Runtime dependencies (`dependencies`)
    #[default]
    Production,
    /// Development dependencies (`devDependencies`)
    Development,
}

impl DependencyKind {
    /// Selects the kind from the `--dev` flag
    pub fn from_dev_flag(dev: bool) -> Self {
        if dev {
            DependencyKind::Development
        } else {
            DependencyKind::Production
        }
    }

    /// Returns the package.json field holding this kind of dependency
    pub fn manifest_field(&self) -> &'static str {
        match self {
            DependencyKind::Production => "dependencies",
            DependencyKind::Development => "devDependencies",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.manifest_field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dev_flag() {
        assert_eq!(DependencyKind::from_dev_flag(false), DependencyKind::Production);
        assert_eq!(DependencyKind::from_dev_flag(true), DependencyKind::Development);
    }

    #[test]
    fn test_manifest_field() {
        assert_eq!(DependencyKind::Production.manifest_field(), "dependencies");
        assert_eq!(DependencyKind::Development.manifest_field(), "devDependencies");
    }

    #[test]
    fn test_default_is_production() {
        assert_eq!(DependencyKind::default(), DependencyKind::Production);
    }

    #[test]
    fn test_serde_dependency_kind() {
        let json = serde_json::to_string(&DependencyKind::Development).unwrap();
        assert_eq!(json, "\"development\"");
        let parsed: DependencyKind = serde_json::from_str("\"production\"").unwrap();
        assert_eq!(parsed, DependencyKind::Production);
    }
}
