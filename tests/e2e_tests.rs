//! End-to-end tests for the deptransfer CLI
//!
//! These tests verify:
//! - Dry-run prints the exact install command and changes nothing
//! - Missing/invalid manifests produce the right messages and exit codes
//! - Confirmation prompts gate the install
//! - JSON output schema

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SOURCE_PACKAGE: &str = r#"{
  "name": "old-project",
  "dependencies": {
    "body-parser": "^1.18.3",
    "cookie-parser": "^1.4.3",
    "cors": "^2.8.5",
    "debug": "^4.1.1",
    "express": "^4.16.4"
  },
  "devDependencies": {
    "nodemon": "^1.18.9"
  }
}"#;

const TARGET_PACKAGE: &str = r#"{
  "name": "new-project",
  "dependencies": {
    "cookie-parser": "^1.4.3",
    "cors": "^2.0.0",
    "debug": "^4.1.1"
  }
}"#;

/// Create source and target projects side by side
fn create_projects() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("old-project");
    let target = temp_dir.path().join("new-project");
    fs::create_dir(&source).unwrap();
    fs::create_dir(&target).unwrap();
    fs::write(source.join("package.json"), SOURCE_PACKAGE).unwrap();
    fs::write(target.join("package.json"), TARGET_PACKAGE).unwrap();
    (temp_dir, source, target)
}

fn deptransfer() -> Command {
    let mut cmd = Command::cargo_bin("deptransfer").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

mod dry_run_tests {
    use super::*;

    #[test]
    fn test_dry_run_prints_command() {
        let (_dir, source, target) = create_projects();

        deptransfer()
            .arg("--source")
            .arg(&source)
            .arg("--target")
            .arg(&target)
            .arg("--dry-run")
            .assert()
            .success()
            .stdout(predicate::str::contains("(dry-run)"))
            .stdout(predicate::str::contains(
                "npm install body-parser express --save",
            ));
    }

    #[test]
    fn test_dry_run_leaves_target_unchanged() {
        let (_dir, source, target) = create_projects();

        deptransfer()
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&target)
            .args(["-n", "--strict", "--yarn"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "yarn add body-parser@^1.18.3 express@^4.16.4",
            ));

        let after = fs::read_to_string(target.join("package.json")).unwrap();
        assert_eq!(after, TARGET_PACKAGE);
    }

    #[test]
    fn test_dry_run_dev_dependencies() {
        let (_dir, source, target) = create_projects();

        deptransfer()
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&target)
            .args(["--dev", "-n"])
            .assert()
            .success()
            .stdout(predicate::str::contains("npm install nodemon --save-dev"));
    }

    #[test]
    fn test_manifest_file_paths_accepted() {
        let (_dir, source, target) = create_projects();

        deptransfer()
            .arg("-s")
            .arg(source.join("package.json"))
            .arg("-t")
            .arg(target.join("package.json"))
            .arg("-n")
            .assert()
            .success()
            .stdout(predicate::str::contains("body-parser"));
    }

    #[test]
    fn test_relative_paths_from_current_dir() {
        let (dir, _source, _target) = create_projects();

        deptransfer()
            .current_dir(dir.path())
            .args(["-s", "old-project", "-t", "new-project", "-n"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "npm install body-parser express --save",
            ));
    }
}

mod nothing_to_do_tests {
    use super::*;

    #[test]
    fn test_missing_source_flag_warns() {
        deptransfer()
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Specify source package path with --source",
            ));
    }

    #[test]
    fn test_no_new_dependencies() {
        let (_dir, source, _target) = create_projects();

        deptransfer()
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&source)
            .assert()
            .success()
            .stdout(predicate::str::contains("No new dependencies found."))
            .stdout(predicate::str::contains("npm install").not());
    }

    #[test]
    fn test_declined_confirmation_installs_nothing() {
        let (_dir, source, target) = create_projects();

        deptransfer()
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&target)
            .write_stdin("n\n")
            .assert()
            .success()
            .stderr(predicate::str::contains("Install 2 dependencies with npm?"))
            .stderr(predicate::str::contains("Nothing installed."));
    }

    #[test]
    fn test_closed_stdin_is_refusal() {
        let (_dir, source, target) = create_projects();

        deptransfer()
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&target)
            .assert()
            .success()
            .stderr(predicate::str::contains("Nothing installed."));
    }
}

mod target_fallback_tests {
    use super::*;

    #[test]
    fn test_uses_current_project_when_confirmed() {
        let (_dir, source, target) = create_projects();

        deptransfer()
            .current_dir(&target)
            .arg("-s")
            .arg(&source)
            .arg("-n")
            .write_stdin("yes\n")
            .assert()
            .success()
            .stderr(predicate::str::contains("Target package is not set!"))
            .stderr(predicate::str::contains("Use current project?"))
            .stdout(predicate::str::contains(
                "npm install body-parser express --save",
            ));
    }

    #[test]
    fn test_current_project_declined() {
        let (_dir, source, target) = create_projects();

        deptransfer()
            .current_dir(&target)
            .arg("-s")
            .arg(&source)
            .write_stdin("n\n")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_no_current_project() {
        let (dir, source, _target) = create_projects();

        deptransfer()
            .current_dir(dir.path())
            .arg("-s")
            .arg(&source)
            .assert()
            .success()
            .stderr(predicate::str::contains("Target package is not set!"))
            .stderr(predicate::str::contains("Use current project?").not());
    }

    #[test]
    fn test_yes_skips_current_project_prompt() {
        let (_dir, source, target) = create_projects();

        deptransfer()
            .current_dir(&target)
            .arg("-s")
            .arg(&source)
            .args(["-n", "-y"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Use current project?").not())
            .stdout(predicate::str::contains("body-parser"));
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_invalid_source() {
        let (dir, _source, target) = create_projects();
        let missing = dir.path().join("missing");

        deptransfer()
            .arg("-s")
            .arg(&missing)
            .arg("-t")
            .arg(&target)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "There is no valid package.json inside specified source.",
            ))
            .stderr(predicate::str::contains("Path:"));
    }

    #[test]
    fn test_invalid_source_path_shown_as_given() {
        let (dir, _source, _target) = create_projects();

        deptransfer()
            .current_dir(dir.path())
            .args(["-s", "missing", "-t", "new-project"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Path: missing\n"));
    }

    #[test]
    fn test_invalid_source_without_target() {
        let dir = tempfile::tempdir().unwrap();

        deptransfer()
            .current_dir(dir.path())
            .args(["-s", "does-not-exist"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "There is no valid package.json inside specified source.",
            ))
            .stderr(predicate::str::contains("Target package is not set!").not());
    }

    #[test]
    fn test_invalid_source_checked_before_current_project_prompt() {
        let (_dir, _source, target) = create_projects();

        deptransfer()
            .current_dir(&target)
            .args(["-s", "does-not-exist"])
            .write_stdin("y\n")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "There is no valid package.json inside specified source.",
            ))
            .stderr(predicate::str::contains("Use current project?").not());
    }

    #[test]
    fn test_invalid_target() {
        let (dir, source, _target) = create_projects();
        let broken = dir.path().join("broken");
        fs::create_dir(&broken).unwrap();
        fs::write(broken.join("package.json"), "{ not json").unwrap();

        deptransfer()
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&broken)
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "There is no valid package.json inside specified target.",
            ));
    }

    #[test]
    fn test_verbose_shows_cause() {
        let (dir, source, _target) = create_projects();
        let broken = dir.path().join("broken");
        fs::create_dir(&broken).unwrap();
        fs::write(broken.join("package.json"), "{ not json").unwrap();

        deptransfer()
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&broken)
            .arg("--verbose")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("failed to parse JSON"));
    }
}

mod json_output_tests {
    use super::*;

    #[test]
    fn test_json_output_schema() {
        let (_dir, source, target) = create_projects();

        let output = deptransfer()
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&target)
            .args(["--json", "-n", "--strict"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["kind"], "production");
        assert_eq!(json["package_manager"], "npm");
        assert_eq!(
            json["command"],
            "npm install body-parser@^1.18.3 express@^4.16.4 --save"
        );

        let deps = json["dependencies"].as_array().unwrap();
        let names: Vec<_> = deps.iter().map(|d| d["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["body-parser", "express"]);
    }
}

#[cfg(unix)]
mod install_tests {
    use super::*;

    /// A fake npm on PATH records its arguments in the project directory
    fn fake_npm(dir: &TempDir, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();
        let script = bin.join("npm");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$@\" > npm-args.txt\necho \"added packages\"\nexit {}\n",
                exit_code
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        bin
    }

    fn path_with(bin: &PathBuf) -> String {
        let existing = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", bin.display(), existing)
    }

    #[test]
    fn test_install_runs_in_target_directory() {
        let (dir, source, target) = create_projects();
        let bin = fake_npm(&dir, 0);

        deptransfer()
            .env("PATH", path_with(&bin))
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&target)
            .arg("-y")
            .assert()
            .success()
            .stdout(predicate::str::contains("Dependencies installed."));

        let args = fs::read_to_string(target.join("npm-args.txt")).unwrap();
        assert_eq!(args.trim(), "install body-parser express --save");
    }

    #[test]
    fn test_json_install_keeps_stdout_parseable() {
        let (dir, source, target) = create_projects();
        let bin = fake_npm(&dir, 0);

        let output = deptransfer()
            .env("PATH", path_with(&bin))
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&target)
            .args(["--json", "-y"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["dry_run"], false);
        assert!(String::from_utf8_lossy(&output.stderr).contains("added packages"));
    }

    #[test]
    fn test_install_failure_exit_code() {
        let (dir, source, target) = create_projects();
        let bin = fake_npm(&dir, 7);

        deptransfer()
            .env("PATH", path_with(&bin))
            .arg("-s")
            .arg(&source)
            .arg("-t")
            .arg(&target)
            .write_stdin("y\n")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("exit code 7"));
    }
}

#[cfg(unix)]
mod interrupt_tests {
    use super::*;
    use std::ffi::OsStr;
    use std::io::Read;
    use std::path::Path;
    use std::process::{Child, Command as StdCommand, Stdio};

    /// Start the CLI in `cwd` and wait until `prompt` is shown on stderr
    fn spawn_at_prompt(cwd: &Path, args: &[&OsStr], prompt: &str) -> Child {
        let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("deptransfer"))
            .current_dir(cwd)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        let mut stderr = child.stderr.take().unwrap();
        let mut seen = Vec::new();
        let mut buf = [0u8; 256];
        while !String::from_utf8_lossy(&seen).contains(prompt) {
            let n = stderr.read(&mut buf).unwrap();
            assert!(n > 0, "prompt not shown: {}", String::from_utf8_lossy(&seen));
            seen.extend_from_slice(&buf[..n]);
        }
        // keep the pipe open so later writes to stderr succeed
        child.stderr = Some(stderr);
        child
    }

    fn interrupt(child: &Child) {
        let status = StdCommand::new("kill")
            .args(["-INT", &child.id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_ctrl_c_at_install_prompt_exits_1() {
        let (dir, source, target) = create_projects();
        let mut child = spawn_at_prompt(
            dir.path(),
            &[
                OsStr::new("-s"),
                source.as_os_str(),
                OsStr::new("-t"),
                target.as_os_str(),
            ],
            "Install 2 dependencies with npm?",
        );

        interrupt(&child);
        assert_eq!(child.wait().unwrap().code(), Some(1));
    }

    #[test]
    fn test_ctrl_c_at_current_project_prompt_exits_1() {
        let (_dir, source, target) = create_projects();
        let mut child = spawn_at_prompt(
            &target,
            &[OsStr::new("-s"), source.as_os_str()],
            "Use current project?",
        );

        interrupt(&child);
        assert_eq!(child.wait().unwrap().code(), Some(1));
    }
}
