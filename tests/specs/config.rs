// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for checks configuration.
//!
//! Tests that turnstile correctly handles:
//! - Manifest discovery
//! - The accepted `checks` shapes
//! - Validation errors, surfaced before anything runs
//!
//! Reference: docs/specs/02-config.md

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// Spec: docs/specs/02-config.md#discovery
///
/// > Running without a package.json fails with a clear error
#[test]
fn missing_manifest_fails() {
    let temp = Project::empty();

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("package.json"));
}

/// Spec: docs/specs/02-config.md#discovery
///
/// > The nearest package.json in a parent directory is used
#[test]
fn manifest_is_discovered_in_parent() {
    let project = sh_checks_project(&[("pass", "exit 0")]);
    let nested = project.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    turnstile_cmd().current_dir(&nested).assert().success();
}

/// Spec: docs/specs/02-config.md#validation
///
/// > A manifest without a checks property names the missing property
#[test]
fn absent_checks_property_fails() {
    let temp = Project::empty();
    temp.package_json(r#"{ "scripts": { "lint": "eslint ." } }"#);

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("checks"));
}

/// Spec: docs/specs/02-config.md#validation
///
/// > An empty checks list is rejected
#[test]
fn empty_checks_list_fails() {
    let temp = Project::empty();
    temp.package_json(r#"{ "scripts": {}, "checks": [] }"#);

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("empty"));
}

/// Spec: docs/specs/02-config.md#validation
///
/// > A checks value that is neither array nor object is rejected
#[test]
fn invalid_checks_shape_fails() {
    let temp = Project::empty();
    temp.package_json(r#"{ "scripts": {}, "checks": 42 }"#);

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid checks format"));
}

/// Spec: docs/specs/02-config.md#validation
///
/// > An object form without a scripts array is rejected
#[test]
fn object_without_scripts_fails() {
    let temp = Project::empty();
    temp.package_json(r#"{ "scripts": {}, "checks": { "runner": "sh" } }"#);

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid checks format"));
}

/// Spec: docs/specs/02-config.md#validation
///
/// > A non-string, non-object check entry is rejected
#[test]
fn invalid_check_entry_fails() {
    let temp = Project::empty();
    temp.package_json(r#"{ "scripts": {}, "checks": [42] }"#);

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid check entry"));
}

/// Spec: docs/specs/02-config.md#validation
///
/// > Every missing script is reported in one error, not just the first
#[test]
fn missing_scripts_are_all_listed() {
    let temp = Project::empty();
    temp.package_json(r#"{ "scripts": {}, "checks": ["lint", "test"] }"#);

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(
            predicates::str::contains("missing scripts")
                .and(predicates::str::contains("lint"))
                .and(predicates::str::contains("test")),
        );
}

/// Spec: docs/specs/02-config.md#validation
///
/// > A declared fix script must exist too
#[test]
fn missing_fix_script_is_reported() {
    let temp = Project::empty();
    temp.package_json(
        r#"{ "scripts": { "lint": "eslint ." }, "checks": [{ "check": "lint", "fix": "lint:fix" }] }"#,
    );

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("lint:fix"));
}

/// Spec: docs/specs/02-config.md#validation
///
/// > An empty runner value is rejected
#[test]
fn empty_runner_value_fails() {
    let temp = Project::empty();
    temp.package_json(
        r#"{ "scripts": { "lint": "true" }, "checks": { "scripts": ["lint"], "runner": "" } }"#,
    );

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("runner"));
}

/// Spec: docs/specs/02-config.md#validation
///
/// > An unknown format value in config is rejected
#[test]
fn unknown_config_format_fails() {
    let temp = Project::empty();
    temp.package_json(
        r#"{ "scripts": { "lint": "true" }, "checks": { "scripts": ["lint"], "format": "fancy" } }"#,
    );

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("format"));
}

/// Spec: docs/specs/02-config.md#validation
///
/// > Malformed JSON is a fatal error naming the file
#[test]
fn malformed_manifest_fails() {
    let temp = Project::empty();
    temp.package_json("{ not json");

    turnstile_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("parse"));
}

/// Spec: docs/specs/02-config.md#validation
///
/// > Config errors are reported before any check runs
#[test]
fn config_errors_skip_execution() {
    let temp = Project::empty();
    // The marker script would create a file if it ever ran
    temp.package_json(r#"{ "scripts": {}, "checks": ["lint", "mark"] }"#);
    temp.script("mark", "touch ran.txt");

    turnstile_cmd().current_dir(temp.path()).assert().failure();
    assert!(!temp.path().join("ran.txt").exists());
}
