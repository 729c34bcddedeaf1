// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live rendering of check progress and results.
//!
//! Two renderers consume the result set as it changes: an interactive
//! one with per-check spinners, and a line-oriented one for CI logs.
//! `auto` picks between them from the environment.

mod ci;
mod interactive;

use std::io::{self, IsTerminal, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::check::{CheckResult, CheckStatus, RunOutput};
use crate::cli::Format;
use crate::color::scheme;

pub use ci::CiRenderer;
pub use interactive::InteractiveRenderer;

/// Consumes the live result set.
///
/// `on_update` runs after every change, `finish` once after every check
/// is terminal. Write failures surface from `finish` and make the run
/// exit non-zero even when all checks passed.
pub trait Renderer {
    fn on_update(&mut self, results: &[CheckResult]);
    fn finish(&mut self, output: &RunOutput) -> anyhow::Result<()>;
}

/// Resolve `auto` to a concrete format: ci under a CI environment or a
/// redirected stdout, interactive on a terminal.
pub fn select_format(format: Format) -> Format {
    match format {
        Format::Auto => {
            if std::env::var_os("CI").is_some() || !std::io::stdout().is_terminal() {
                Format::Ci
            } else {
                Format::Interactive
            }
        }
        other => other,
    }
}

/// Build the renderer for a format.
pub fn select_renderer(format: Format, color: ColorChoice) -> Box<dyn Renderer> {
    match select_format(format) {
        Format::Interactive => Box::new(InteractiveRenderer::new(color)),
        _ => Box::new(CiRenderer::new(color)),
    }
}

/// Human duration: milliseconds under a second, seconds above.
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

/// Write the final summary: one line per check plus the aggregate footer.
pub(crate) fn write_summary(stream: &mut StandardStream, output: &RunOutput) -> io::Result<()> {
    for result in &output.results {
        let (glyph, style) = status_style(result);
        stream.set_color(&style)?;
        write!(stream, "{glyph} ")?;
        stream.set_color(&scheme::check_name())?;
        write!(stream, "{}", result.name)?;
        stream.set_color(&scheme::duration())?;
        writeln!(stream, " ({})", format_duration(result.duration_ms))?;
        stream.reset()?;
    }

    writeln!(stream)?;
    if output.has_failures() {
        let failed = output.failed_count();
        let noun = if failed == 1 { "check" } else { "checks" };
        stream.set_color(&scheme::fail())?;
        write!(stream, "{failed} {noun} failed")?;
    } else {
        stream.set_color(&scheme::pass())?;
        write!(stream, "All checks passed")?;
    }
    stream.set_color(&scheme::duration())?;
    writeln!(stream, " ({})", format_duration(output.duration_ms))?;
    stream.reset()?;
    Ok(())
}

/// Write a check's captured output, normalizing the trailing newline.
pub(crate) fn write_output_block(
    stream: &mut StandardStream,
    result: &CheckResult,
) -> io::Result<()> {
    for text in [&result.stdout, &result.stderr] {
        if !text.is_empty() {
            write!(stream, "{text}")?;
            if !text.ends_with('\n') {
                writeln!(stream)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn status_style(result: &CheckResult) -> (&'static str, termcolor::ColorSpec) {
    match result.status {
        CheckStatus::Failed => ("×", scheme::fail()),
        _ => ("✓", scheme::pass()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
