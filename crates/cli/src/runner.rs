//! Concurrent check orchestration with error recovery.
//!
//! Fans every planned check out as its own task, merges streamed
//! snapshots into one ordered result set, and completes only when the
//! whole set is terminal. One failing or panicking check never prevents
//! the others from finishing.

use std::time::Instant;

use tokio::sync::mpsc;

use crate::check::{CheckResult, CheckStatus, RunOutput};
use crate::command::build_command;
use crate::exec;
use crate::resolve::ExecutionPlan;

/// The check runner executes every planned check concurrently.
pub struct CheckRunner {
    plan: ExecutionPlan,
}

impl CheckRunner {
    pub fn new(plan: ExecutionPlan) -> Self {
        Self { plan }
    }

    /// Run all planned checks to completion.
    ///
    /// All checks spawn together; there is no concurrency limit and no
    /// batching. `on_update` sees the full result set after every
    /// change: once when all entries are seeded as running, then after
    /// every merged snapshot. Each slot has exactly one writing task;
    /// slots stay in plan order however checks finish.
    pub async fn run_all<F>(&self, mut on_update: F) -> RunOutput
    where
        F: FnMut(&[CheckResult]),
    {
        let started = Instant::now();

        let mut results: Vec<CheckResult> = self
            .plan
            .checks
            .iter()
            .map(|check| CheckResult::running(check.name.clone()))
            .collect();
        on_update(&results);

        let (tx, mut rx) = mpsc::unbounded_channel::<CheckResult>();
        let mut handles = Vec::with_capacity(self.plan.checks.len());

        for check in &self.plan.checks {
            let script = self.plan.effective_script(check);
            let command = build_command(&self.plan.runner, script, self.plan.script_body(script));
            let name = check.name.clone();
            let cwd = self.plan.cwd.clone();
            let tx = tx.clone();

            handles.push(tokio::spawn(async move {
                exec::run_check(name, command, &cwd, |snapshot| {
                    // Delivery fails only if the run was abandoned
                    let _ = tx.send(snapshot.clone());
                })
                .await
            }));
        }
        drop(tx);

        // Every task delivers its terminal snapshot before dropping its
        // sender, so draining the channel to close is the join barrier.
        while let Some(snapshot) = rx.recv().await {
            if let Some(slot) = results.iter_mut().find(|r| r.name == snapshot.name) {
                *slot = snapshot;
            }
            on_update(&results);
        }

        // Reap the tasks; a panicked check must not wedge the run.
        for (index, joined) in futures::future::join_all(handles).await.into_iter().enumerate() {
            match joined {
                Ok(result) => results[index] = result,
                Err(err) => {
                    let slot = &mut results[index];
                    slot.status = CheckStatus::Failed;
                    slot.exit_code = Some(1);
                    slot.stderr = format!("internal error: check task failed: {err}");
                }
            }
        }

        RunOutput {
            results,
            duration_ms: started.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
