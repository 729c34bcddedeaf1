// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest discovery.
//!
//! Walks from the starting directory up to the filesystem root looking
//! for the nearest package.json.

use std::path::{Path, PathBuf};

/// Find package.json starting from `start_dir` and walking up.
pub fn find_manifest(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let manifest_path = current.join("package.json");
        if manifest_path.exists() {
            return Some(manifest_path);
        }

        // Move up one directory
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
