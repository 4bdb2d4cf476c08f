//! Line sinks for console output.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// A sink that receives fully rendered console lines.
pub trait ConsoleSink: Send + Sync {
    /// Write a line to the sink. `line` already ends with a newline.
    fn write_line(&self, line: &str);
}

/// Console sink over any writer; each line is written then flushed.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

/// Console sink that writes to stdout.
pub type StdoutSink = WriterSink<io::Stdout>;

/// Console sink that writes to stderr.
pub type StderrSink = WriterSink<io::Stderr>;

impl<W> WriterSink<W> {
    /// Wrap `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Take the writer back.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl StdoutSink {
    /// Sink on the process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StderrSink {
    /// Sink on the process stderr.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ConsoleSink for WriterSink<W> {
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
        {
            tracing::warn!(target: "appdeploy.console", %error, "console write failed");
        }
    }
}
