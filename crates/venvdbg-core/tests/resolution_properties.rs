//! Integration tests for resolution over on-disk marker files.
//!
//! Each test builds a throwaway venv root the way the test framework lays
//! it out: one directory per environment holding a marker file.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use venvdbg_core::{
    DEFAULT_MARKER_NAME, MetadataIndex, ResolutionResult, ResolveError, Resolver, Selector,
};

fn venv_root(markers: &[(&str, &str)]) -> TempDir {
    let root = tempfile::tempdir().expect("tempdir");
    for (dir, contents) in markers {
        let env_dir = root.path().join(dir);
        fs::create_dir_all(&env_dir).expect("create env dir");
        fs::write(env_dir.join(DEFAULT_MARKER_NAME), contents).expect("write marker");
    }
    root
}

fn resolver(root: &Path) -> Resolver {
    Resolver::new(MetadataIndex::with_default_marker(root))
}

fn pattern(p: &str) -> Selector {
    Selector::Pattern(p.to_string())
}

/// A single entry containing the pattern resolves to its environment.
#[test]
fn unique_substring_resolves_to_owner() {
    let root = venv_root(&[
        ("tmp1", "/tmp/env1\ntest_create_bridge:1\n"),
        ("tmp2", "/tmp/env2\ntest_delete_port:1\n"),
        ("tmp3", "/tmp/env3\ntest_list_lswitch:4\n"),
    ]);

    for (needle, expected) in [
        ("create", "/tmp/env1"),
        ("delete_port", "/tmp/env2"),
        ("lswitch", "/tmp/env3"),
    ] {
        let result = resolver(root.path()).resolve(&pattern(needle)).unwrap();
        assert_eq!(result.identifier, expected, "pattern {needle}");
    }
}

/// The worked example: "ba" hits test_bar in envA before test_baz in envB.
#[test]
fn first_match_wins_worked_example() {
    let root = venv_root(&[
        ("envA", "/tmp/envA\ntest_foo:1\ntest_bar:2\n"),
        ("envB", "/tmp/envB\ntest_baz:1\n"),
    ]);

    let result = resolver(root.path()).resolve(&pattern("ba")).unwrap();
    assert_eq!(result.identifier, "/tmp/envA");
    assert_eq!(result.matched_test_name.as_deref(), Some("test_bar:2"));
}

/// Repeated calls over the same root pick the same environment.
#[test]
fn first_match_is_deterministic() {
    let root = venv_root(&[
        ("tmp_c", "/tmp/envC\ntest_shared:1\n"),
        ("tmp_a", "/tmp/envA\ntest_shared:1\n"),
        ("tmp_b", "/tmp/envB\ntest_shared:1\n"),
    ]);

    let resolver = resolver(root.path());
    let first = resolver.resolve(&pattern("shared")).unwrap();
    assert_eq!(first.identifier, "/tmp/envA");
    for _ in 0..5 {
        assert_eq!(resolver.resolve(&pattern("shared")).unwrap(), first);
    }
}

#[test]
fn zero_matches_is_no_match_found() {
    let root = venv_root(&[("tmp1", "/tmp/env1\ntest_foo:1\n")]);

    let err = resolver(root.path()).resolve(&pattern("test_nope")).unwrap_err();
    assert!(
        matches!(err, ResolveError::NoMatchFound { ref pattern, .. } if pattern == "test_nope"),
        "unexpected error: {err}"
    );
}

#[test]
fn explicit_identifier_never_touches_index() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("does-not-exist");

    let result = resolver(&missing)
        .resolve_parts(None, Some("/tmp/env123"))
        .unwrap();
    assert_eq!(
        result,
        ResolutionResult {
            identifier: "/tmp/env123".to_string(),
            matched_test_name: None,
            source: None,
        }
    );
}

#[test]
fn both_selectors_conflict_even_if_each_resolves() {
    let root = venv_root(&[("tmp1", "/tmp/env1\nx_test:1\n")]);

    let err = resolver(root.path())
        .resolve_parts(Some("x"), Some("/tmp/env123"))
        .unwrap_err();
    assert!(matches!(err, ResolveError::ConflictingSelectors));
}

#[test]
fn no_selector_is_missing() {
    let root = venv_root(&[("tmp1", "/tmp/env1\nx_test:1\n")]);
    let err = resolver(root.path()).resolve_parts(None, None).unwrap_err();
    assert!(matches!(err, ResolveError::MissingSelector));
}

/// Garbage in one file must not stop the scan from reaching later files.
#[test]
fn malformed_lines_never_raise() {
    let root = venv_root(&[
        ("tmp1", "/tmp/env1\n\n   \n:no-name\n\t\n"),
        ("tmp2", ""),
        ("tmp3", "/tmp/env3\ntest_target:9\n"),
    ]);

    let result = resolver(root.path()).resolve(&pattern("target")).unwrap();
    assert_eq!(result.identifier, "/tmp/env3");
}

#[test]
fn empty_root_has_no_environments() {
    let root = tempfile::tempdir().unwrap();
    let err = resolver(root.path()).resolve(&pattern("anything")).unwrap_err();
    assert!(matches!(err, ResolveError::NoEnvironmentsFound { .. }));
}

#[test]
fn records_list_every_environment() {
    let root = venv_root(&[
        ("tmp_b", "/tmp/envB\ntest_baz:1\n"),
        ("tmp_a", "/tmp/envA\ntest_foo:1\ntest_bar:2\n"),
    ]);

    let (records, stats) = MetadataIndex::with_default_marker(root.path())
        .records()
        .unwrap();
    let ids: Vec<_> = records.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(ids, ["/tmp/envA", "/tmp/envB"]);
    assert_eq!(records[0].entries.len(), 2);
    assert_eq!(stats.skipped_lines, 0);
}
