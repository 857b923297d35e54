//! End-to-end tests running the `venvdbg` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const MARKER: &str = ".venvdbg-tests";

fn venv_root(markers: &[(&str, &str)]) -> TempDir {
    let root = tempfile::tempdir().expect("tempdir");
    for (dir, contents) in markers {
        let env_dir = root.path().join(dir);
        fs::create_dir_all(&env_dir).unwrap();
        fs::write(env_dir.join(MARKER), contents).unwrap();
    }
    root
}

fn venvdbg(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_venvdbg"))
        .arg("--root")
        .arg(root)
        .args(args)
        .current_dir(root)
        .env_remove("RUST_LOG")
        .env_remove("VENVDBG_ROOT")
        .env_remove("VENVDBG_MARKER")
        .env_remove("VENVDBG_RUNTIME_DIR")
        .env_remove("VENVDBG_LAUNCHER")
        .output()
        .expect("run venvdbg")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn example_root() -> TempDir {
    venv_root(&[
        ("envA", "/tmp/envA\ntest_foo:1\ntest_bar:2\n"),
        ("envB", "/tmp/envB\ntest_baz:1\n"),
    ])
}

#[test]
fn resolve_prints_identifier_and_match() {
    let root = example_root();
    let output = venvdbg(root.path(), &["resolve", "-t", "ba"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "identifier = /tmp/envA\nmatched_test = test_bar:2\n"
    );
}

#[test]
fn resolve_quiet_prints_identifier_only() {
    let root = example_root();
    let output = venvdbg(root.path(), &["resolve", "-q", "-t", "baz"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "/tmp/envB\n");
}

#[test]
fn resolve_json_is_parseable() {
    let root = example_root();
    let output = venvdbg(root.path(), &["resolve", "--json", "--env", "/tmp/env123"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["identifier"], "/tmp/env123");
    assert!(value["matched_test_name"].is_null());
}

#[test]
fn no_match_exits_one_with_diagnostic() {
    let root = example_root();
    let output = venvdbg(root.path(), &["resolve", "-t", "test_missing"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("test_missing"), "stderr: {stderr}");
}

#[test]
fn selector_misuse_exits_two() {
    let root = example_root();
    let both = venvdbg(root.path(), &["resolve", "-t", "x", "-e", "/tmp/env123"]);
    assert_eq!(both.status.code(), Some(2));

    let neither = venvdbg(root.path(), &["resolve"]);
    assert_eq!(neither.status.code(), Some(2));
}

#[test]
fn empty_root_exits_noinput() {
    let root = tempfile::tempdir().unwrap();
    let output = venvdbg(root.path(), &["resolve", "-t", "anything"]);
    assert_eq!(output.status.code(), Some(66));
}

#[test]
fn list_marks_the_first_match() {
    let root = example_root();
    let output = venvdbg(root.path(), &["list", "-t", "ba"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "* /tmp/envA  test_bar:2\n  /tmp/envB  test_baz:1\n"
    );
}

#[test]
fn paths_reports_explicit_root() {
    let root = example_root();
    let output = venvdbg(root.path(), &["paths"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains(&format!("venv_root = {}", root.path().display())));
    assert!(text.contains("venv_root_source = explicit"));
}

#[cfg(unix)]
#[test]
fn debug_propagates_launcher_exit_code() {
    let root = example_root();
    let script = root.path().join("inspect.sh");
    fs::write(&script, "#!/bin/sh\n[ \"$VENVDBG_ENV\" = /tmp/envA ] || exit 9\nexit 7\n").unwrap();
    let launcher = format!("/bin/sh {}", script.display());
    let output = venvdbg(root.path(), &["debug", "-t", "foo", "--launcher", &launcher]);

    assert_eq!(output.status.code(), Some(7));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Entering /tmp/envA (matched test_foo:1)"), "stderr: {stderr}");
}
