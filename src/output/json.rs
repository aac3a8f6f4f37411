//! JSON output formatter for machine processing

use crate::domain::{Dependency, DependencyKind, PackageManager};
use crate::orchestrator::TransferPlan;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a transfer plan
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Compared manifest section
    kind: DependencyKind,
    /// Package manager the command targets
    package_manager: PackageManager,
    /// Source package.json
    source: String,
    /// Target package.json
    target: String,
    /// New dependencies with their source specifiers
    dependencies: &'a [Dependency],
    /// Install command, null when nothing is new
    command: Option<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, plan: &TransferPlan, writer: &mut dyn Write) -> std::io::Result<()> {
        let dependencies = plan.dependencies();
        let output = JsonOutput {
            dry_run: plan.options.dry_run,
            kind: plan.kind(),
            package_manager: plan.package_manager(),
            source: plan.source.display().to_string(),
            target: plan.target.display().to_string(),
            dependencies: &dependencies,
            command: plan.command.as_deref(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
