//! Injected logging capability
//!
//! Every component receives a [`SharedLogger`] at construction instead of
//! reaching for a process-wide logger. The binary wires in [`TracingLogger`];
//! tests wire in [`MemoryLogger`] and assert on what was recorded.

use std::path::Path;
use std::sync::{Arc, Mutex};

/// Severity of a recorded log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Sink for lifecycle events emitted by the catalog components
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);

    /// Warning about a single file. Sinks with structured fields keep the
    /// path apart from the message; others prefix it.
    fn warn_file(&self, path: &Path, message: &str) {
        self.warn(&format!("{}: {}", path.display(), message));
    }
}

/// Logger handle shared between the builder, enricher and filter engine
pub type SharedLogger = Arc<dyn Logger>;

/// Forwards to the `tracing` macros; the subscriber decides where lines go
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn shared() -> SharedLogger {
        Arc::new(Self)
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn warn_file(&self, path: &Path, message: &str) {
        tracing::warn!(path = %path.display(), "{}", message);
    }
}

/// Records every line in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }

    /// Snapshot of all recorded lines, oldest first
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Messages recorded at the given level
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

/// Install the global `tracing` subscriber for the binary
///
/// `RUST_LOG` wins when set. Otherwise the `-v` count picks the level and
/// the walker crates stay at `warn` until `-vvv`.
pub fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
