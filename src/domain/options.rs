//! Option set shared by reconciliation and command synthesis

use super::{DependencyKind, PackageManager};

/// Independent flags controlling a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstallOptions {
    /// Operate on devDependencies instead of dependencies
    pub dev: bool,
    /// Install with Yarn instead of npm
    pub yarn: bool,
    /// Pin installed versions to the source specifiers
    pub strict: bool,
    /// Produce the command without executing it
    pub dry_run: bool,
}

impl InstallOptions {
    /// Sets the dev flag (builder pattern)
    pub fn dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    /// Sets the yarn flag (builder pattern)
    pub fn yarn(mut self, yarn: bool) -> Self {
        self.yarn = yarn;
        self
    }

    /// Sets the strict flag (builder pattern)
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the dry-run flag (builder pattern)
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The manifest section these options operate on
    pub fn dependency_kind(&self) -> DependencyKind {
        DependencyKind::from_dev_flag(self.dev)
    }

    /// The package manager these options select
    pub fn package_manager(&self) -> PackageManager {
        PackageManager::from_yarn_flag(self.yarn)
    }
}
