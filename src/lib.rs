//! deptransfer - npm dependency transfer library
//!
//! Finds the dependencies a source package.json declares that a target
//! package.json lacks, and builds the npm or Yarn command that installs them:
//! - `reconcile` computes the missing dependency names
//! - `command` synthesizes the install command text
//! - `package_manager` runs it

pub mod cli;
pub mod command;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod prompt;
pub mod reconcile;
