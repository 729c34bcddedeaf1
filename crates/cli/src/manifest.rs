// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! package.json model.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// The slice of package.json the tool consumes.
///
/// `checks` stays a raw JSON value: its accepted shapes are polymorphic
/// and normalized separately (see `resolve`). Unknown fields are ignored;
/// package.json carries plenty of keys that are none of our business.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default)]
    pub checks: Option<serde_json::Value>,
}

impl Manifest {
    /// Load and parse a package.json file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
