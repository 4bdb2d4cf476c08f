//! User-facing console output contract.
//!
//! Console notices are what the operator reads on their terminal. Diagnostic
//! logging goes through `tracing` instead.

/// Severity of a console notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational output.
    Info,
    /// Non-fatal warning.
    Warn,
}

/// Presentation hint for a notice. Rendering is up to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeStyle {
    /// Render as plain text.
    #[default]
    Plain,
    /// Render so it stands out (e.g. inverted colors).
    Highlight,
}

/// A single console notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleNotice {
    /// Severity.
    pub level: NoticeLevel,
    /// Plain text message, without any styling escapes.
    pub message: Box<str>,
    /// Presentation hint.
    pub style: NoticeStyle,
}

/// Boundary contract for user-facing console output.
pub trait ConsolePort: Send + Sync {
    /// Emit a notice.
    fn emit(&self, notice: ConsoleNotice);

    /// Convenience: informational notice.
    fn info(&self, message: &str, style: NoticeStyle) {
        self.emit(ConsoleNotice {
            level: NoticeLevel::Info,
            message: message.into(),
            style,
        });
    }

    /// Convenience: warning notice.
    fn warn(&self, message: &str, style: NoticeStyle) {
        self.emit(ConsoleNotice {
            level: NoticeLevel::Warn,
            message: message.into(),
            style,
        });
    }
}
