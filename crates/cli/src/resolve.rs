// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks config resolution.
//!
//! Normalizes the accepted shapes of the `checks` field in package.json
//! into an execution plan: which scripts run, through which runner, in
//! which directory, rendered how. Resolution is pure; nothing is spawned
//! and no I/O happens here.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::cli::Format;
use crate::manifest::Manifest;

/// Default package runner when neither config nor flags name one.
pub const DEFAULT_RUNNER: &str = "npm";

/// One check to run: canonical name plus optional fix script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDef {
    pub name: String,
    pub fix: Option<String>,
}

/// Everything the runner needs, resolved and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    /// Checks in declaration order.
    pub checks: Vec<CheckDef>,
    pub runner: String,
    /// Directory the checks execute in (the manifest's directory).
    pub cwd: PathBuf,
    pub format: Format,
    /// Run fix scripts instead of check scripts.
    pub fix: bool,
    /// Script bodies from the manifest, for runners that need them.
    pub scripts: BTreeMap<String, String>,
}

impl ExecutionPlan {
    /// The script a check executes under this plan: the fix script in
    /// fix mode, the check script otherwise.
    pub fn effective_script<'a>(&self, check: &'a CheckDef) -> &'a str {
        if self.fix {
            check.fix.as_deref().unwrap_or(&check.name)
        } else {
            &check.name
        }
    }

    /// Body of the named script, when the manifest declares one.
    pub fn script_body(&self, name: &str) -> &str {
        self.scripts.get(name).map_or("", String::as_str)
    }
}

/// CLI-provided settings; they win over config values.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub runner: Option<String>,
    pub format: Option<Format>,
    pub fix: bool,
}

/// Fatal configuration problems, detected before anything runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no checks declared in package.json")]
    NoChecks,
    #[error("invalid checks format: expected an array or an object with a \"scripts\" array")]
    InvalidFormat,
    #[error("invalid check entry: expected a script name or an object with a \"check\" property")]
    InvalidEntry,
    #[error("checks list is empty")]
    Empty,
    #[error("invalid {field} value {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("missing scripts: {0}")]
    MissingScripts(String),
}

/// Resolve the manifest's checks config against CLI overrides.
///
/// Precedence per setting: CLI flag, then config value, then default
/// (`npm` runner, `auto` format). In fix mode, checks that declare no
/// fix script are dropped from the plan rather than attempted.
pub fn resolve(
    manifest: &Manifest,
    cwd: PathBuf,
    overrides: &Overrides,
) -> Result<ExecutionPlan, ConfigError> {
    let value = manifest.checks.as_ref().ok_or(ConfigError::NoChecks)?;
    let (entries, config_runner, config_format) = split_config(value)?;

    if entries.is_empty() {
        return Err(ConfigError::Empty);
    }

    let mut checks = Vec::with_capacity(entries.len());
    for entry in entries {
        checks.push(parse_entry(entry)?);
    }

    validate_scripts(&checks, &manifest.scripts)?;

    if overrides.fix {
        // Checks without a fix script are excluded, not failed
        checks.retain(|check| check.fix.is_some());
    }

    let runner = overrides
        .runner
        .clone()
        .or(config_runner)
        .unwrap_or_else(|| DEFAULT_RUNNER.to_string());
    let format = overrides.format.or(config_format).unwrap_or_default();

    Ok(ExecutionPlan {
        checks,
        runner,
        cwd,
        format,
        fix: overrides.fix,
        scripts: manifest.scripts.clone(),
    })
}

/// Split the raw checks value into entries plus inline settings.
fn split_config(value: &Value) -> Result<(&[Value], Option<String>, Option<Format>), ConfigError> {
    match value {
        // Bare form: "checks": ["lint", "test"]
        Value::Array(entries) => Ok((entries.as_slice(), None, None)),
        // Extended form: settings alongside a "scripts" array
        Value::Object(obj) => {
            let entries = match obj.get("scripts") {
                Some(Value::Array(entries)) => entries.as_slice(),
                _ => return Err(ConfigError::InvalidFormat),
            };

            // An empty runner would compose a command with no program
            let runner = match obj.get("runner") {
                None => None,
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(other) => {
                    return Err(ConfigError::InvalidValue {
                        field: "runner",
                        value: other.to_string(),
                    });
                }
            };

            let format = match obj.get("format") {
                None => None,
                Some(Value::String(s)) => match Format::from_config_str(s) {
                    Some(format) => Some(format),
                    None => {
                        return Err(ConfigError::InvalidValue {
                            field: "format",
                            value: format!("\"{s}\""),
                        });
                    }
                },
                Some(other) => {
                    return Err(ConfigError::InvalidValue {
                        field: "format",
                        value: other.to_string(),
                    });
                }
            };

            Ok((entries, runner, format))
        }
        _ => Err(ConfigError::InvalidFormat),
    }
}

/// Parse a single check entry.
fn parse_entry(entry: &Value) -> Result<CheckDef, ConfigError> {
    match entry {
        // Simple form: just a script name
        Value::String(name) => Ok(CheckDef {
            name: name.clone(),
            fix: None,
        }),
        // Extended form: object with check and optional fix
        Value::Object(obj) => {
            let name = match obj.get("check") {
                Some(Value::String(s)) => s.clone(),
                _ => return Err(ConfigError::InvalidEntry),
            };
            let fix = match obj.get("fix") {
                None => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(_) => return Err(ConfigError::InvalidEntry),
            };
            Ok(CheckDef { name, fix })
        }
        _ => Err(ConfigError::InvalidEntry),
    }
}

/// Every check name and every declared fix name must exist as a script.
/// All missing names are reported in one error, not just the first.
fn validate_scripts(
    checks: &[CheckDef],
    scripts: &BTreeMap<String, String>,
) -> Result<(), ConfigError> {
    let mut missing = Vec::new();
    for check in checks {
        if !scripts.contains_key(&check.name) {
            missing.push(check.name.clone());
        }
        if let Some(fix) = &check.fix {
            if !scripts.contains_key(fix) {
                missing.push(fix.clone());
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingScripts(missing.join(", ")))
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
