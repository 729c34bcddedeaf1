// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation: the binary's single action.
//!
//! Wires discovery, resolution, the runner, and the renderer together
//! and maps the outcome to the process exit code.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use turnstile::cli::Cli;
use turnstile::color::resolve_color;
use turnstile::discovery;
use turnstile::manifest::Manifest;
use turnstile::render;
use turnstile::resolve::{self, Overrides};
use turnstile::runner::CheckRunner;

/// Run every configured check and report the aggregate outcome.
pub async fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let manifest_path = discovery::find_manifest(&cwd)
        .context("no package.json found in this directory or any parent")?;
    let manifest = Manifest::load(&manifest_path)?;

    let project_root = manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(cwd);

    let overrides = Overrides {
        runner: cli.runner.clone(),
        format: cli.format,
        fix: cli.fix,
    };
    let plan = resolve::resolve(&manifest, project_root, &overrides)?;

    tracing::debug!(
        "running {} checks with {} in {}",
        plan.checks.len(),
        plan.runner,
        plan.cwd.display()
    );

    let color = resolve_color(cli.color, cli.no_color);
    let mut renderer = render::select_renderer(plan.format, color);

    let output = CheckRunner::new(plan)
        .run_all(|results| renderer.on_update(results))
        .await;
    renderer.finish(&output)?;

    Ok(ExitCode::from(output.exit_code() as u8))
}
