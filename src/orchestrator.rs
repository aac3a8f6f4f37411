//! Transfer orchestrator for coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: load → reconcile → synthesize → install
//! - Dry-run mode support
//! - Source/target tagging of manifest load failures

use crate::command::synthesize;
use crate::domain::{Dependency, DependencyKind, InstallOptions, PackageManager};
use crate::error::AppError;
use crate::manifest::{load_manifest, project_dir, Manifest};
use crate::package_manager::InstallRunner;
use crate::reconcile::{reconcile, Reconciliation};
use std::path::{Path, PathBuf};

/// A package.json read from disk
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    /// Resolved package.json path
    pub path: PathBuf,
    pub manifest: Manifest,
}

impl LoadedManifest {
    /// Load the source manifest at `path`
    ///
    /// Failures carry `requested`, the path as the user wrote it.
    pub fn source(path: PathBuf, requested: &Path) -> Result<Self, AppError> {
        let manifest = load_manifest(&path).map_err(|e| AppError::invalid_source(requested, e))?;
        Ok(Self { path, manifest })
    }

    /// Load the target manifest at `path`
    ///
    /// Failures carry `requested`, the path as the user wrote it.
    pub fn target(path: PathBuf, requested: &Path) -> Result<Self, AppError> {
        let manifest = load_manifest(&path).map_err(|e| AppError::invalid_target(requested, e))?;
        Ok(Self { path, manifest })
    }
}

/// What a transfer would do
#[derive(Debug, Clone)]
pub struct TransferPlan {
    /// Source package.json
    pub source: PathBuf,
    /// Target package.json
    pub target: PathBuf,
    /// Options the plan was built with
    pub options: InstallOptions,
    /// Dependencies missing from the target
    pub reconciliation: Reconciliation,
    /// Install command, absent when nothing is missing
    pub command: Option<String>,
}

impl TransferPlan {
    /// Returns true if the target is missing anything
    pub fn has_changes(&self) -> bool {
        self.command.is_some()
    }

    /// New dependencies with their source specifiers
    pub fn dependencies(&self) -> Vec<Dependency> {
        self.reconciliation.dependencies()
    }

    pub fn kind(&self) -> DependencyKind {
        self.reconciliation.kind
    }

    pub fn package_manager(&self) -> PackageManager {
        self.options.package_manager()
    }

    /// Directory the install runs in
    pub fn working_dir(&self) -> &Path {
        project_dir(&self.target)
    }
}

/// Orchestrator for coordinating the transfer workflow
pub struct Orchestrator {
    options: InstallOptions,
}

impl Orchestrator {
    /// Create a new orchestrator with the given options
    pub fn new(options: InstallOptions) -> Self {
        Self { options }
    }

    /// Work out what the target is missing
    pub fn plan(&self, source: &LoadedManifest, target: &LoadedManifest) -> TransferPlan {
        let reconciliation = reconcile(&source.manifest, &target.manifest, &self.options);
        tracing::debug!(
            kind = %reconciliation.kind,
            missing = reconciliation.len(),
            "reconciled dependencies"
        );

        let command = (!reconciliation.is_empty()).then(|| {
            synthesize(
                &reconciliation.names,
                &reconciliation.source_versions,
                &self.options,
            )
        });
        if let Some(command) = &command {
            tracing::debug!(command = %command, "synthesized install command");
        }

        TransferPlan {
            source: source.path.clone(),
            target: target.path.clone(),
            options: self.options,
            reconciliation,
            command,
        }
    }

    /// Run the plan's install command
    ///
    /// Returns `Ok(false)` without running anything for dry runs and for plans
    /// with nothing to install.
    pub async fn execute<R>(&self, plan: &TransferPlan, runner: &R) -> Result<bool, AppError>
    where
        R: InstallRunner + ?Sized,
    {
        let Some(command) = plan.command.as_deref() else {
            return Ok(false);
        };
        if plan.options.dry_run {
            return Ok(false);
        }

        runner.run(command, plan.working_dir()).await?;
        Ok(true)
    }
}
