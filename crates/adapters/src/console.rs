//! Terminal console adapter.

use crate::console_sink::{ConsoleSink, StderrSink, StdoutSink};
use appdeploy_ports::{ConsoleNotice, ConsolePort, NoticeStyle};
use owo_colors::OwoColorize;
use std::sync::Arc;

/// Env var that disables colored output when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Console adapter rendering notices as terminal lines.
#[derive(Clone)]
pub struct TerminalConsole {
    sink: Arc<dyn ConsoleSink>,
    color: bool,
}

impl TerminalConsole {
    /// Build a console writing to `sink`.
    pub fn new(sink: Arc<dyn ConsoleSink>, color: bool) -> Self {
        Self { sink, color }
    }

    /// Console writing to stdout.
    pub fn stdout(color: bool) -> Self {
        Self::new(Arc::new(StdoutSink::stdout()), color)
    }

    /// Console writing to stderr.
    pub fn stderr(color: bool) -> Self {
        Self::new(Arc::new(StderrSink::stderr()), color)
    }

    /// Whether highlight styling is applied.
    pub const fn color_enabled(&self) -> bool {
        self.color
    }

    /// Render a notice as a single line, including the trailing newline.
    pub fn render(&self, notice: &ConsoleNotice) -> String {
        let message: &str = &notice.message;
        match notice.style {
            NoticeStyle::Highlight if self.color => {
                format!("{}\n", message.black().on_yellow())
            },
            _ => format!("{message}\n"),
        }
    }
}

impl ConsolePort for TerminalConsole {
    fn emit(&self, notice: ConsoleNotice) {
        self.sink.write_line(&self.render(&notice));
    }
}

/// Decide whether to color output given the `--no-color` flag and `NO_COLOR`.
pub fn color_enabled_from_env(no_color_flag: bool) -> bool {
    let no_color = std::env::var_os(NO_COLOR_ENV);
    resolve_color(no_color_flag, no_color.as_deref().and_then(|value| value.to_str()))
}

fn resolve_color(no_color_flag: bool, no_color_env: Option<&str>) -> bool {
    !no_color_flag && no_color_env.is_none_or(str::is_empty)
}
