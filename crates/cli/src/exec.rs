// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution for a single check.
//!
//! Spawns the composed command through the platform shell, streams both
//! pipes into the accumulating result, and reports progress through an
//! observer callback. Execution never fails: spawn errors become failed
//! results so one broken check cannot abort the run.

use std::io::IsTerminal;
use std::path::Path;
use std::process::Stdio;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::check::{CheckResult, CheckStatus};

/// Exit code recorded when a check is killed by a signal.
const SIGNAL_EXIT_CODE: i32 = -1;

/// Exit code recorded when the command cannot be spawned at all.
const SPAWN_FAILURE_EXIT_CODE: i32 = 1;

/// Run one check to completion.
///
/// Invokes `on_update` with a snapshot after every output chunk, and once
/// more with the terminal result before returning it. Snapshots for one
/// check arrive in order; stdout, stderr, and duration only grow.
pub async fn run_check<F>(
    name: String,
    command: String,
    cwd: &Path,
    mut on_update: F,
) -> CheckResult
where
    F: FnMut(&CheckResult),
{
    let started = Instant::now();
    let mut result = CheckResult::running(name);

    tracing::debug!("spawning {:?} in {}", command, cwd.display());

    let mut cmd = shell_command(&command);
    cmd.current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if force_color() {
        cmd.env("FORCE_COLOR", "1");
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            result.status = CheckStatus::Failed;
            result.stderr = err.to_string();
            result.exit_code = Some(SPAWN_FAILURE_EXIT_CODE);
            result.duration_ms = elapsed_ms(started);
            on_update(&result);
            return result;
        }
    };

    let mut stdout = child.stdout.take();
    let mut stderr = child.stderr.take();
    let mut out_buf = [0u8; 8192];
    let mut err_buf = [0u8; 8192];
    let mut out_open = stdout.is_some();
    let mut err_open = stderr.is_some();

    // Drain both pipes chunk by chunk; EOF on both means the child is
    // done writing and wait() below will not block on a full pipe.
    while out_open || err_open {
        tokio::select! {
            chunk = read_chunk(&mut stdout, &mut out_buf), if out_open => match chunk {
                Some(text) => {
                    result.stdout.push_str(&text);
                    result.duration_ms = elapsed_ms(started);
                    on_update(&result);
                }
                None => out_open = false,
            },
            chunk = read_chunk(&mut stderr, &mut err_buf), if err_open => match chunk {
                Some(text) => {
                    result.stderr.push_str(&text);
                    result.duration_ms = elapsed_ms(started);
                    on_update(&result);
                }
                None => err_open = false,
            },
        }
    }

    // EOF on both pipes is not exit: the child may keep running after
    // closing them, so the terminal duration is taken after wait().
    match child.wait().await {
        Ok(status) => {
            result.exit_code = Some(status.code().unwrap_or(SIGNAL_EXIT_CODE));
            result.status = if status.success() {
                CheckStatus::Success
            } else {
                CheckStatus::Failed
            };
        }
        Err(err) => {
            if !result.stderr.is_empty() {
                result.stderr.push('\n');
            }
            result.stderr.push_str(&format!("failed to wait on check: {err}"));
            result.exit_code = Some(SPAWN_FAILURE_EXIT_CODE);
            result.status = CheckStatus::Failed;
        }
    }
    result.duration_ms = elapsed_ms(started);

    tracing::debug!(
        "{} exited with {:?} after {}ms",
        result.name,
        result.exit_code,
        result.duration_ms
    );
    on_update(&result);
    result
}

/// Read the next chunk as lossy UTF-8. `None` on EOF or read error.
async fn read_chunk<R>(reader: &mut Option<R>, buf: &mut [u8]) -> Option<String>
where
    R: AsyncRead + Unpin,
{
    match reader {
        Some(r) => match r.read(buf).await {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(String::from_utf8_lossy(&buf[..n]).into_owned()),
        },
        None => None,
    }
}

/// Platform shell invocation for a composed command line.
fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

/// Children keep color when our stdout is a terminal or CI is set.
fn force_color() -> bool {
    std::io::stdout().is_terminal() || std::env::var_os("CI").is_some()
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
