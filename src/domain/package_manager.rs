//! Node.js package managers that can perform the install

use serde::{Deserialize, Serialize};
use std::fmt;

/// Package manager used to install the transferred dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// npm
    #[default]
    Npm,
    /// Yarn
    Yarn,
}

impl PackageManager {
    /// Selects the package manager from the `--yarn` flag
    pub fn from_yarn_flag(yarn: bool) -> Self {
        if yarn {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    /// Command prefix that adds packages to a project
    pub fn add_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn add",
        }
    }

    /// Flag that records the packages as development dependencies
    pub fn dev_flag(&self) -> &'static str {
        match self {
            PackageManager::Npm => "--save-dev",
            PackageManager::Yarn => "--dev",
        }
    }

    /// Flag that records the packages as regular dependencies, if one is needed
    pub fn save_flag(&self) -> Option<&'static str> {
        match self {
            PackageManager::Npm => Some("--save"),
            // yarn add always writes to package.json
            PackageManager::Yarn => None,
        }
    }

    /// Returns the executable name
    pub fn binary_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary_name())
    }
}
