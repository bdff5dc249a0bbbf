//! Output transports.
//!
//! # Responsibilities
//! - Own one output sink per transport (stdout, file, memory, discard)
//! - Format records through a `tracing-subscriber` fmt layer
//! - Carry the label and optional level override for that sink
//!
//! # Design Decisions
//! - Each transport owns its own `tracing::Dispatch`, so records never reach
//!   the process-wide subscriber
//! - The dispatch is built once at construction; options are immutable after
//! - Files are opened eagerly so a bad path fails at construction

use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

use crate::logger::error::{LoggerError, LoggerResult};
use crate::logger::level::LogLevel;
use crate::logger::memory::MemoryBuffer;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Line format used by a transport's fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

/// Which sink a transport writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportKind {
    Console,
    File(PathBuf),
    Memory,
    Discard,
}

impl TransportKind {
    /// Name used when the options don't supply one.
    pub fn default_name(&self) -> &'static str {
        match self {
            TransportKind::Console => "console",
            TransportKind::File(_) => "file",
            TransportKind::Memory => "memory",
            TransportKind::Discard => "discard",
        }
    }
}

/// Per-transport construction options.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    /// Overrides the kind's default name.
    pub name: Option<String>,
    /// Tag attached to every record as a `label` field.
    pub label: Option<String>,
    /// Extra threshold applied after the logger's own level.
    pub level: Option<LogLevel>,
    pub format: LogFormat,
    pub colorize: bool,
    pub timestamp: bool,
}

impl TransportOptions {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }
}

/// A named output destination for log records.
pub struct Transport {
    kind: TransportKind,
    name: String,
    label: Option<String>,
    level: Option<LogLevel>,
    dispatch: Dispatch,
}

impl Transport {
    /// Writes to stdout.
    pub fn console(options: TransportOptions) -> Self {
        Self::build(TransportKind::Console, options, std::io::stdout)
    }

    /// Appends to `path`, creating it if missing.
    pub fn file(path: impl AsRef<Path>, mut options: TransportOptions) -> LoggerResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggerError::OpenFile {
                path: path.clone(),
                source,
            })?;

        options.colorize = false;
        Ok(Self::build(TransportKind::File(path), options, Mutex::new(file)))
    }

    /// Writes into a shared in-process buffer.
    pub fn memory(buffer: MemoryBuffer, mut options: TransportOptions) -> Self {
        options.colorize = false;
        Self::build(TransportKind::Memory, options, buffer)
    }

    /// Accepts and drops every record. Carries no label.
    pub fn discard() -> Self {
        Self::build(
            TransportKind::Discard,
            TransportOptions::default(),
            std::io::sink,
        )
    }

    fn build<W>(kind: TransportKind, options: TransportOptions, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let layer = fmt_layer(writer, options.format, options.colorize, options.timestamp);
        let dispatch = Dispatch::new(tracing_subscriber::registry().with(layer));
        let name = options
            .name
            .unwrap_or_else(|| kind.default_name().to_string());

        Self {
            kind,
            name,
            label: options.label,
            level: options.level,
            dispatch,
        }
    }

    pub fn kind(&self) -> &TransportKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn level(&self) -> Option<LogLevel> {
        self.level
    }

    pub(crate) fn admits(&self, level: LogLevel) -> bool {
        self.level.map_or(true, |threshold| threshold.admits(level))
    }

    pub(crate) fn write(&self, level: LogLevel, message: &dyn fmt::Display) {
        let label = self.label.as_deref();
        tracing::dispatcher::with_default(&self.dispatch, || emit(level, label, message));
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("label", &self.label)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

fn fmt_layer<W>(writer: W, format: LogFormat, colorize: bool, timestamp: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(colorize)
        .with_target(false);

    match (format, timestamp) {
        (LogFormat::Full, true) => base.boxed(),
        (LogFormat::Full, false) => base.without_time().boxed(),
        (LogFormat::Compact, true) => base.compact().boxed(),
        (LogFormat::Compact, false) => base.compact().without_time().boxed(),
        (LogFormat::Json, true) => base.json().boxed(),
        (LogFormat::Json, false) => base.json().without_time().boxed(),
    }
}

macro_rules! emit_at {
    ($level:expr, $label:expr, $message:expr) => {
        match $label {
            Some(label) => tracing::event!($level, label = %label, "{}", $message),
            None => tracing::event!($level, "{}", $message),
        }
    };
}

fn emit(level: LogLevel, label: Option<&str>, message: &dyn fmt::Display) {
    match level {
        LogLevel::Error => emit_at!(tracing::Level::ERROR, label, message),
        LogLevel::Warn => emit_at!(tracing::Level::WARN, label, message),
        LogLevel::Info => emit_at!(tracing::Level::INFO, label, message),
        LogLevel::Debug => emit_at!(tracing::Level::DEBUG, label, message),
        LogLevel::Trace => emit_at!(tracing::Level::TRACE, label, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_transport_writes_label_and_message() {
        let buffer = MemoryBuffer::new();
        let transport = Transport::memory(buffer.clone(), TransportOptions::default().with_label("svc"));

        transport.write(LogLevel::Warn, &"disk almost full");

        let out = buffer.contents();
        assert!(out.contains("WARN"), "missing level in {out:?}");
        assert!(out.contains("disk almost full"));
        assert!(out.contains("label=svc"));
    }

    #[test]
    fn test_json_format() {
        let buffer = MemoryBuffer::new();
        let options = TransportOptions {
            label: Some("api".into()),
            format: LogFormat::Json,
            ..Default::default()
        };
        let transport = Transport::memory(buffer.clone(), options);

        transport.write(LogLevel::Info, &"ready");

        let line = buffer.lines().pop().unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["fields"]["message"], "ready");
        assert_eq!(value["fields"]["label"], "api");
    }

    #[test]
    fn test_transport_level_override() {
        let transport = Transport::memory(
            MemoryBuffer::new(),
            TransportOptions::default().with_level(LogLevel::Warn),
        );
        assert!(transport.admits(LogLevel::Error));
        assert!(!transport.admits(LogLevel::Info));

        let unfiltered = Transport::memory(MemoryBuffer::new(), TransportOptions::default());
        assert!(unfiltered.admits(LogLevel::Trace));
    }

    #[test]
    fn test_discard_has_no_label() {
        let transport = Transport::discard();
        assert_eq!(transport.name(), "discard");
        assert_eq!(transport.label(), None);
        assert_eq!(transport.kind(), &TransportKind::Discard);
        transport.write(LogLevel::Error, &"dropped");
    }

    #[test]
    fn test_file_transport_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        let transport = Transport::file(&path, TransportOptions::default().with_label("worker")).unwrap();
        assert_eq!(transport.name(), "file");
        transport.write(LogLevel::Info, &"job done");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("job done"));
        assert!(written.contains("label=worker"));
    }

    #[test]
    fn test_file_transport_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");

        let err = Transport::file(&path, TransportOptions::default()).unwrap_err();
        assert!(matches!(err, LoggerError::OpenFile { path: ref p, .. } if p == &path));
    }
}
