//! CLI argument parsing with clap derive.

use clap::Parser;

use crate::color::ColorMode;

/// Concurrent check runner for package.json scripts
#[derive(Parser)]
#[command(name = "turnstile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Package runner used to execute check scripts
    #[arg(long, value_name = "RUNNER", env = "TURNSTILE_RUNNER")]
    pub runner: Option<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<Format>,

    /// Run fix scripts instead of check scripts
    #[arg(long)]
    pub fix: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Output format: auto picks interactive on a terminal, ci otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Auto,
    Interactive,
    Ci,
}

impl Format {
    /// Parse a format string from the checks config.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "interactive" => Some(Self::Interactive),
            "ci" => Some(Self::Ci),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
