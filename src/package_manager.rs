//! Package manager integration for running the synthesized install command
//!
//! This module provides:
//! - A runner abstraction so the CLI can be exercised without spawning npm
//! - A shell-backed runner with inherited standard I/O and Ctrl-C handling

use crate::error::InstallError;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Trait for running an install command
#[async_trait]
pub trait InstallRunner {
    /// Run `command` in `working_dir`, failing on a non-zero exit
    async fn run(&self, command: &str, working_dir: &Path) -> Result<(), InstallError>;
}

/// Runner that executes the command through the platform shell
#[derive(Debug, Default)]
pub struct ShellRunner {
    /// Send the child's stdout to our stderr
    stdout_to_stderr: bool,
}

impl ShellRunner {
    /// Create a new shell runner
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep our stdout for machine-readable output only
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

#[async_trait]
impl InstallRunner for ShellRunner {
    async fn run(&self, command: &str, working_dir: &Path) -> Result<(), InstallError> {
        tracing::debug!(command, dir = %working_dir.display(), "spawning install");

        // stdin/stdout/stderr are inherited so the package manager can prompt and report
        let mut cmd = Self::shell_command(command);
        cmd.current_dir(working_dir);
        if self.stdout_to_stderr {
            cmd.stdout(std::io::stderr());
        }
        let mut child = cmd.spawn().map_err(|e| InstallError::spawn(command, e))?;

        let status = tokio::select! {
            status = child.wait() => status,
            signal = tokio::signal::ctrl_c() => {
                match signal {
                    Ok(()) => {
                        tracing::debug!(command, "interrupted, killing install");
                        let _ = child.kill().await;
                        return Err(InstallError::interrupted(command));
                    }
                    Err(e) => {
                        tracing::warn!("failed to listen for Ctrl-C: {}", e);
                        child.wait().await
                    }
                }
            }
        }
        .map_err(|e| InstallError::spawn(command, e))?;

        tracing::debug!(command, code = ?status.code(), "install finished");

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::failed(command, status.code()))
        }
    }
}
