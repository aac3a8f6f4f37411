//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Source and target header
//! - Aligned list of new dependencies with their specifiers
//! - The install command, marked in dry-run mode

use crate::orchestrator::TransferPlan;
use crate::output::{theme, OutputFormatter, Verbosity};
use colored::ColoredString;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn command_prefix(&self, dry_run: bool) -> String {
        if dry_run {
            format!("{} ", self.paint("(dry-run)", theme::warning))
        } else {
            format!("{} ", self.paint("$", theme::placeholder))
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, plan: &TransferPlan, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{} {}",
            self.paint("Source:", theme::info),
            plan.source.display()
        )?;
        writeln!(
            writer,
            "{} {}",
            self.paint("Target:", theme::info),
            plan.target.display()
        )?;
        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "{} {} via {}",
                self.paint("Comparing:", theme::info),
                plan.kind(),
                plan.package_manager()
            )?;
        }
        writeln!(writer)?;

        let dependencies = plan.dependencies();
        if dependencies.is_empty() {
            writeln!(
                writer,
                "{}",
                self.paint("No new dependencies found.", theme::success)
            )?;
            return Ok(());
        }

        writeln!(
            writer,
            "{}",
            self.paint(
                &format!("New {} ({}):", plan.kind(), dependencies.len()),
                theme::info
            )
        )?;

        let width = dependencies.iter().map(|d| d.name.len()).max().unwrap_or(0);
        for dep in &dependencies {
            let name = format!("{:width$}", dep.name, width = width);
            writeln!(
                writer,
                "  {} {}",
                name,
                self.paint(&dep.version, theme::placeholder)
            )?;
        }
        writeln!(writer)?;

        if let Some(command) = &plan.command {
            writeln!(
                writer,
                "{}{}",
                self.command_prefix(plan.options.dry_run),
                self.paint(command, theme::info)
            )?;
        }

        Ok(())
    }
}
