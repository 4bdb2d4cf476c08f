//! Output format helpers for CLI commands.

use appdeploy_adapters::{TerminalConsole, color_enabled_from_env};
use clap::{Args, ValueEnum};

/// Output format choices for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text output.
    #[default]
    Text,
    /// Machine-friendly JSON output.
    Json,
}

/// Output-related CLI flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format for command responses.
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
    /// Disable colored console output (also honored via `NO_COLOR`).
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Emit debug diagnostics on stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Output mode derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub format: OutputFormat,
    pub color: bool,
    pub verbose: bool,
}

impl OutputMode {
    /// Build output mode from CLI flags and the environment.
    #[must_use]
    pub fn from_args(args: &OutputArgs) -> Self {
        Self {
            format: args.output.unwrap_or_default(),
            color: color_enabled_from_env(args.no_color),
            verbose: args.verbose,
        }
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Console for user-facing notices. JSON mode keeps stdout for the payload.
    #[must_use]
    pub fn console(self) -> TerminalConsole {
        if self.is_json() {
            TerminalConsole::stderr(self.color)
        } else {
            TerminalConsole::stdout(self.color)
        }
    }
}
