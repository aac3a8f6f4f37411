//! Core domain models for deptransfer
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency sections of a package.json
//! - Supported package managers
//! - Dependency information structures
//! - The option set driving a transfer

mod dependency;
mod dependency_kind;
mod options;
mod package_manager;

pub use dependency::Dependency;
pub use dependency_kind::DependencyKind;
pub use options::InstallOptions;
pub use package_manager::PackageManager;
