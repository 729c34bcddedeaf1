//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for building throwaway JavaScript projects and
//! invoking the turnstile binary against them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

/// Returns a Command configured to run the turnstile binary
pub fn turnstile_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("turnstile"))
}

/// A throwaway project directory.
pub struct Project {
    temp: tempfile::TempDir,
}

impl Project {
    /// Create an empty project directory.
    pub fn empty() -> Self {
        Self {
            temp: tempfile::tempdir().expect("tempdir should be created"),
        }
    }

    /// Write the project's package.json.
    pub fn package_json(&self, contents: &str) -> &Self {
        std::fs::write(self.path().join("package.json"), contents)
            .expect("package.json should be written");
        self
    }

    /// Write a helper script file into the project.
    pub fn script(&self, name: &str, contents: &str) -> &Self {
        std::fs::write(self.path().join(name), contents).expect("script should be written");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}

/// Project whose checks are `sh` script files named after the checks,
/// so specs never depend on npm being installed. The script body
/// decides each check's outcome.
pub fn sh_checks_project(checks: &[(&str, &str)]) -> Project {
    let project = Project::empty();

    let script_entries: Vec<String> = checks
        .iter()
        .map(|(name, _)| format!("\"{name}\": \"true\""))
        .collect();
    let check_entries: Vec<String> = checks
        .iter()
        .map(|(name, _)| format!("\"{name}\""))
        .collect();
    project.package_json(&format!(
        r#"{{
  "name": "fixture",
  "scripts": {{ {} }},
  "checks": {{ "runner": "sh", "scripts": [{}] }}
}}"#,
        script_entries.join(", "),
        check_entries.join(", ")
    ));

    for (name, body) in checks {
        project.script(name, body);
    }
    project
}
