//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with loading a package.json
//! - InstallError: Issues with running the package manager
//! - AppError: What the CLI reports, tagging manifest errors with their role

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The source manifest could not be loaded
    #[error("There is no valid package.json inside specified source.")]
    InvalidSource {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    /// The target manifest could not be loaded
    #[error("There is no valid package.json inside specified target.")]
    InvalidTarget {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    /// Package manager related errors
    #[error(transparent)]
    Install(#[from] InstallError),

    /// Reading the confirmation answer failed
    #[error("failed to read answer: {0}")]
    Prompt(#[source] std::io::Error),

    /// Ctrl-C while waiting for an answer
    #[error("interrupted")]
    Interrupted,
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// Valid JSON whose top level is not an object
    #[error("manifest is not a JSON object: {path}")]
    NotAnObject { path: PathBuf },
}

/// Errors related to running the install command
#[derive(Error, Debug)]
pub enum InstallError {
    /// The shell could not be started
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited unsuccessfully
    #[error("'{command}' failed with {}", describe_code(.code))]
    Failed { command: String, code: Option<i32> },

    /// The user interrupted the command
    #[error("'{command}' was interrupted")]
    Interrupted { command: String },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl AppError {
    /// Path of the manifest involved in a load failure, as the user gave it
    pub fn manifest_path(&self) -> Option<&PathBuf> {
        match self {
            AppError::InvalidSource { path, .. } | AppError::InvalidTarget { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }

    /// Returns true when the failure was a user interrupt
    pub fn is_interrupted(&self) -> bool {
        matches!(
            self,
            AppError::Interrupted | AppError::Install(InstallError::Interrupted { .. })
        )
    }

    /// Creates a new InvalidSource error
    pub fn invalid_source(path: impl Into<PathBuf>, source: ManifestError) -> Self {
        AppError::InvalidSource {
            path: path.into(),
            source,
        }
    }

    /// Creates a new InvalidTarget error
    pub fn invalid_target(path: impl Into<PathBuf>, source: ManifestError) -> Self {
        AppError::InvalidTarget {
            path: path.into(),
            source,
        }
    }
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new NotAnObject error
    pub fn not_an_object(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotAnObject { path: path.into() }
    }
}

impl InstallError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        InstallError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new Failed error
    pub fn failed(command: impl Into<String>, code: Option<i32>) -> Self {
        InstallError::Failed {
            command: command.into(),
            code,
        }
    }

    /// Creates a new Interrupted error
    pub fn interrupted(command: impl Into<String>) -> Self {
        InstallError::Interrupted {
            command: command.into(),
        }
    }
}
