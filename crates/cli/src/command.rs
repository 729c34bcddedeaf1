// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command composition for check scripts.
//!
//! Maps a package runner and a script name to the shell command that
//! executes it. Pure string work; the process runner owns execution.

/// Runners that invoke scripts through a `run` subcommand.
const RUN_SUBCOMMAND_RUNNERS: [&str; 4] = ["npm", "pnpm", "yarn", "bun"];

/// Compose the shell command for one check.
///
/// `script_body` is the script's value from package.json. Only the `npx`
/// runner consults it: npx cannot resolve script names, so the body is
/// split into executable and arguments and invoked directly, with `-y`
/// answering the install prompt (stdin is disconnected).
pub fn build_command(runner: &str, check: &str, script_body: &str) -> String {
    if RUN_SUBCOMMAND_RUNNERS.contains(&runner) {
        return format!("{runner} run {check}");
    }

    if runner == "npx" {
        let mut parts = script_body.split_whitespace();
        return match parts.next() {
            Some(exe) => {
                let args = parts.collect::<Vec<_>>().join(" ");
                if args.is_empty() {
                    format!("npx -y {exe}")
                } else {
                    format!("npx -y {exe} {args}")
                }
            }
            None => format!("npx -y {check}"),
        };
    }

    // Custom runner: the script name becomes its first argument. No
    // quoting is applied; the command runs through the shell as composed.
    format!("{runner} {check}")
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
