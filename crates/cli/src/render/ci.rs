// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented renderer for CI logs.
//!
//! No cursor control: each check prints one block when it finishes, in
//! completion order, followed by a summary once everything is done.

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::check::{CheckResult, RunOutput};
use crate::color::scheme;

use super::{Renderer, format_duration, status_style, write_output_block, write_summary};

pub struct CiRenderer {
    stream: StandardStream,
    printed: Vec<bool>,
}

impl CiRenderer {
    pub fn new(color: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stdout(color),
            printed: Vec::new(),
        }
    }

    fn print_finished(&mut self, result: &CheckResult) -> io::Result<()> {
        let (glyph, style) = status_style(result);
        self.stream.set_color(&style)?;
        write!(self.stream, "{glyph} ")?;
        self.stream.set_color(&scheme::check_name())?;
        write!(self.stream, "{}", result.name)?;
        self.stream.set_color(&scheme::duration())?;
        writeln!(self.stream, " ({})", format_duration(result.duration_ms))?;
        self.stream.reset()?;
        write_output_block(&mut self.stream, result)
    }
}

impl Renderer for CiRenderer {
    fn on_update(&mut self, results: &[CheckResult]) {
        if self.printed.len() < results.len() {
            self.printed.resize(results.len(), false);
        }

        for (index, result) in results.iter().enumerate() {
            if result.is_finished() && !self.printed[index] {
                self.printed[index] = true;
                // Mid-run write errors resurface from finish
                let _ = self.print_finished(result);
            }
        }
    }

    fn finish(&mut self, output: &RunOutput) -> anyhow::Result<()> {
        writeln!(self.stream)?;
        write_summary(&mut self.stream, output)?;
        self.stream.flush()?;
        Ok(())
    }
}
