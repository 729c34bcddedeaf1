// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive renderer with one spinner per check.
//!
//! Spinners tick while checks run and settle into pass/fail lines as
//! they finish. The progress area is cleared before the final report so
//! failed output and the summary are what remains in the scrollback.

use std::io::Write;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::check::{CheckResult, RunOutput};
use crate::color::scheme;

use super::{Renderer, format_duration, write_output_block, write_summary};

pub struct InteractiveRenderer {
    multi: MultiProgress,
    bars: Vec<ProgressBar>,
    color: ColorChoice,
    running_style: ProgressStyle,
    done_style: ProgressStyle,
}

impl InteractiveRenderer {
    pub fn new(color: ColorChoice) -> Self {
        let running_style = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let done_style = ProgressStyle::default_spinner()
            .template("{msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        Self {
            multi: MultiProgress::new(),
            bars: Vec::new(),
            color,
            running_style,
            done_style,
        }
    }

    fn seed(&mut self, results: &[CheckResult]) {
        for result in results {
            let bar = self.multi.add(ProgressBar::new_spinner());
            bar.set_style(self.running_style.clone());
            bar.set_message(result.name.clone());
            bar.enable_steady_tick(Duration::from_millis(100));
            self.bars.push(bar);
        }
    }
}

impl Renderer for InteractiveRenderer {
    fn on_update(&mut self, results: &[CheckResult]) {
        if self.bars.is_empty() {
            self.seed(results);
        }

        for (index, result) in results.iter().enumerate() {
            let Some(bar) = self.bars.get(index) else {
                continue;
            };
            if result.is_finished() && !bar.is_finished() {
                let glyph = if result.passed() { "✓" } else { "×" };
                bar.set_style(self.done_style.clone());
                bar.finish_with_message(format!(
                    "{glyph} {} ({})",
                    result.name,
                    format_duration(result.duration_ms)
                ));
            }
        }
    }

    fn finish(&mut self, output: &RunOutput) -> anyhow::Result<()> {
        self.multi.clear()?;

        let mut stream = StandardStream::stdout(self.color);
        for result in output.results.iter().filter(|r| r.failed()) {
            stream.set_color(&scheme::fail())?;
            write!(stream, "× ")?;
            stream.set_color(&scheme::check_name())?;
            writeln!(stream, "{}", result.name)?;
            stream.reset()?;
            write_output_block(&mut stream, result)?;
            writeln!(stream)?;
        }

        write_summary(&mut stream, output)?;
        stream.flush()?;
        Ok(())
    }
}
