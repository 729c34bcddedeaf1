// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check result types shared by the runner and the renderers.

/// Lifecycle state of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Running,
    Success,
    Failed,
}

/// Accumulated state of one check.
///
/// Snapshots of this struct flow to observers while the subprocess runs;
/// the final snapshot carries the terminal status and exit code.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub stdout: String,
    pub stderr: String,
    /// Present exactly when the check has reached a terminal status.
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
}

impl CheckResult {
    /// Fresh entry for a check that has been scheduled but not finished.
    pub fn running(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Running,
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
            duration_ms: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status != CheckStatus::Running
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Success
    }

    pub fn failed(&self) -> bool {
        self.status == CheckStatus::Failed
    }
}

/// Final outcome of a run: every check terminal, in plan order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub results: Vec<CheckResult>,
    pub duration_ms: u64,
}

impl RunOutput {
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(CheckResult::failed)
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.failed()).count()
    }

    /// Process exit code for the run: 0 only when every check passed.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() { 1 } else { 0 }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
