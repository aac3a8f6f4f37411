//! CLI argument parsing module for deptransfer

use crate::domain::InstallOptions;
use clap::Parser;
use std::path::PathBuf;

/// Install the dependencies another project has and this one lacks
#[derive(Parser, Debug, Clone)]
#[command(
    name = "deptransfer",
    version,
    about = "Transfer missing npm dependencies from one package.json to another"
)]
pub struct CliArgs {
    /// Source project directory or package.json
    #[arg(short, long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Target project directory or package.json (default: asks to use the current project)
    #[arg(short, long, value_name = "PATH")]
    pub target: Option<PathBuf>,

    // Transfer options
    /// Transfer devDependencies instead of dependencies
    #[arg(long)]
    pub dev: bool,

    /// Install with Yarn instead of npm
    #[arg(long)]
    pub yarn: bool,

    /// Pin installed packages to the source's version specifiers
    #[arg(long)]
    pub strict: bool,

    // General options
    /// Dry run mode - print the install command without running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Install without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Output the plan in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Option set for reconciliation and command synthesis
    pub fn install_options(&self) -> InstallOptions {
        InstallOptions::default()
            .dev(self.dev)
            .yarn(self.yarn)
            .strict(self.strict)
            .dry_run(self.dry_run)
    }

    /// Default tracing filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "deptransfer=debug"
        } else {
            "warn"
        }
    }
}
