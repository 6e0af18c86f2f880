// Stub linters are small shell scripts, so these tests are unix-only.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn lintrun(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lintrun").unwrap();
    cmd.current_dir(dir.path()).env("LINTRUN_ROOT", dir.path());
    cmd
}

fn venv_bin(project: &Path) -> PathBuf {
    project.join("venv").join("bin")
}

/// Create a fake venv under `project` and install a stub linter script.
fn install_stub(project: &Path, name: &str, script: &str) {
    let bin = venv_bin(project);
    std::fs::create_dir_all(&bin).unwrap();
    std::fs::write(bin.join("python"), "").unwrap();

    let stub = bin.join(name);
    std::fs::write(&stub, format!("#!/bin/sh\n{script}\n")).unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();
}

fn project_with_linter_status(status: i32) -> TempDir {
    let dir = TempDir::new().unwrap();
    install_stub(dir.path(), "flake8", &format!("exit {status}"));
    dir
}

// ---------------------------------------------------------------------------
// Exit-status contract
// ---------------------------------------------------------------------------

#[test]
fn clean_lint_exits_zero() {
    let dir = project_with_linter_status(0);
    lintrun(&dir).assert().success();
}

#[test]
fn nonzero_statuses_normalize_to_one() {
    for status in [1, 2, 77, 255] {
        let dir = project_with_linter_status(status);
        lintrun(&dir).assert().code(1);
    }
}

#[test]
fn linter_output_passes_through() {
    let dir = TempDir::new().unwrap();
    install_stub(
        dir.path(),
        "flake8",
        "echo 'app.py:3:1: E302 expected 2 blank lines'\nexit 1",
    );
    lintrun(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("E302 expected 2 blank lines"));
}

// ---------------------------------------------------------------------------
// Setup failures (before the linter ever runs)
// ---------------------------------------------------------------------------

#[test]
fn missing_root_fails_without_running_linter() {
    let mut cmd = Command::cargo_bin("lintrun").unwrap();
    cmd.arg("--root").arg("/nonexistent/project");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn bad_root_never_reaches_the_linter() {
    // A real project whose stub would leave a marker if it ever ran.
    let dir = TempDir::new().unwrap();
    install_stub(dir.path(), "flake8", "touch linted\nexit 0");

    let mut cmd = Command::cargo_bin("lintrun").unwrap();
    cmd.current_dir(dir.path())
        .arg("--root")
        .arg(dir.path().join("no-such-subdir"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));

    assert!(
        !dir.path().join("linted").exists(),
        "linter must not run when the root is missing"
    );
}

#[test]
fn missing_venv_fails() {
    let dir = TempDir::new().unwrap();
    lintrun(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("virtual environment"));
}

#[test]
fn empty_venv_reports_no_linter() {
    let dir = TempDir::new().unwrap();
    let bin = venv_bin(dir.path());
    std::fs::create_dir_all(&bin).unwrap();
    std::fs::write(bin.join("python"), "").unwrap();

    lintrun(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no supported linter"));
}

#[test]
fn venv_without_interpreter_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(venv_bin(dir.path())).unwrap();

    lintrun(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no python interpreter"));
}

// ---------------------------------------------------------------------------
// No filesystem mutation by the wrapper
// ---------------------------------------------------------------------------

#[test]
fn read_only_project_tree_still_lints() {
    let dir = project_with_linter_status(0);

    // Lock the whole tree; the wrapper itself must not need write access.
    set_tree_mode(dir.path(), 0o555);
    let assert = lintrun(&dir).assert();
    set_tree_mode(dir.path(), 0o755);

    assert.success();
}

fn set_tree_mode(path: &Path, mode: u32) {
    if path.is_dir() {
        for entry in std::fs::read_dir(path).unwrap() {
            let p = entry.unwrap().path();
            if p.is_dir() {
                set_tree_mode(&p, mode);
            }
        }
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
    }
}

// ---------------------------------------------------------------------------
// Environment seen by the linter
// ---------------------------------------------------------------------------

#[test]
fn linter_runs_with_venv_activated() {
    let dir = TempDir::new().unwrap();
    install_stub(
        dir.path(),
        "flake8",
        "printf '%s' \"$VIRTUAL_ENV\" > activated\nexit 0",
    );
    lintrun(&dir).assert().success();

    let seen = std::fs::read_to_string(dir.path().join("activated")).unwrap();
    assert_eq!(PathBuf::from(seen), dir.path().join("venv"));
}

#[test]
fn linter_runs_in_project_root() {
    let dir = TempDir::new().unwrap();
    install_stub(dir.path(), "flake8", "pwd > where-i-ran\nexit 0");

    // Invoke from a subdirectory; cwd of the linter must still be the root.
    let sub = dir.path().join("src");
    std::fs::create_dir_all(&sub).unwrap();
    let mut cmd = Command::cargo_bin("lintrun").unwrap();
    cmd.current_dir(&sub).env("LINTRUN_ROOT", dir.path());
    cmd.assert().success();

    let seen = std::fs::read_to_string(dir.path().join("where-i-ran")).unwrap();
    let seen = PathBuf::from(seen.trim());
    // Compare canonicalized: the tempdir may sit behind a symlink on macOS.
    assert_eq!(
        seen.canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}

// ---------------------------------------------------------------------------
// Config overrides
// ---------------------------------------------------------------------------

#[test]
fn config_pins_the_linter() {
    let dir = TempDir::new().unwrap();
    install_stub(dir.path(), "ruff", "echo ruff > picked\nexit 0");
    install_stub(dir.path(), "flake8", "echo flake8 > picked\nexit 0");
    std::fs::write(dir.path().join(".lintrun.yaml"), "linter: flake8\n").unwrap();

    lintrun(&dir).assert().success();
    let picked = std::fs::read_to_string(dir.path().join("picked")).unwrap();
    assert_eq!(picked.trim(), "flake8");
}

#[test]
fn ruff_is_preferred_without_config() {
    let dir = TempDir::new().unwrap();
    install_stub(dir.path(), "ruff", "echo ruff > picked\nexit 0");
    install_stub(dir.path(), "flake8", "echo flake8 > picked\nexit 0");

    lintrun(&dir).assert().success();
    let picked = std::fs::read_to_string(dir.path().join("picked")).unwrap();
    assert_eq!(picked.trim(), "ruff");
}

#[test]
fn extra_args_reach_the_linter() {
    let dir = TempDir::new().unwrap();
    install_stub(dir.path(), "flake8", "printf '%s' \"$*\" > argv\nexit 0");
    std::fs::write(
        dir.path().join(".lintrun.yaml"),
        "extra_args:\n  - --max-line-length=100\n",
    )
    .unwrap();

    lintrun(&dir).assert().success();
    let argv = std::fs::read_to_string(dir.path().join("argv")).unwrap();
    assert_eq!(argv, ". --max-line-length=100");
}

#[test]
fn configured_venv_dir_is_used() {
    let dir = TempDir::new().unwrap();
    // Stub lives under env/, not venv/
    let bin = dir.path().join("env").join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    std::fs::write(bin.join("python"), "").unwrap();
    let stub = bin.join("flake8");
    std::fs::write(&stub, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

    std::fs::write(dir.path().join(".lintrun.yaml"), "venv: env\n").unwrap();
    lintrun(&dir).assert().success();
}

#[test]
fn invalid_config_is_fatal() {
    let dir = project_with_linter_status(0);
    std::fs::write(dir.path().join(".lintrun.yaml"), "lintre: flake8\n").unwrap();
    lintrun(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// JSON report
// ---------------------------------------------------------------------------

#[test]
fn json_report_has_expected_fields() {
    let dir = project_with_linter_status(3);
    let output = lintrun(&dir).arg("--json").assert().code(1);

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).into_owned();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["linter"], "flake8");
    assert_eq!(report["passed"], false);
    assert_eq!(report["status"], 3);
    assert!(report["duration_ms"].is_u64());
    assert!(report["started_at"].is_string());
}

#[test]
fn json_report_on_clean_run() {
    let dir = project_with_linter_status(0);
    let output = lintrun(&dir).arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).into_owned();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["passed"], true);
    assert_eq!(report["status"], 0);
}
