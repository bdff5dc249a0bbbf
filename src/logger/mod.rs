//! Bound logger instances.
//!
//! # Data Flow
//! ```text
//! LoggerSettings
//!     → Logger::new (level + declared transports)
//!     → injector adds console or discard transport
//!     → Arc<Logger> shared by every value of the decorated type
//!
//! logger.info("...")
//!     → logger level check
//!     → per-transport level check
//!     → transport dispatch (fmt layer → sink)
//! ```
//!
//! # Design Decisions
//! - Transport list is copy-on-write (`ArcSwap`) so handles never block
//!   each other while logging
//! - Level is a single atomic, readable without locking
//! - Transport names are unique within one logger

pub mod error;
pub mod level;
pub mod memory;
pub mod transport;

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::{LoggerSettings, TransportSettings};

pub use error::{LoggerError, LoggerResult};
pub use level::LogLevel;
pub use memory::MemoryBuffer;
pub use transport::{LogFormat, Transport, TransportKind, TransportOptions};

/// Logger handle shared by every value of a decorated type.
pub type SharedLogger = Arc<Logger>;

/// A logger with a severity threshold and a set of named transports.
pub struct Logger {
    level: AtomicU8,
    transports: ArcSwap<Vec<Arc<Transport>>>,
    defaults: TransportOptions,
}

impl Logger {
    /// Build a logger from `settings`, opening every declared transport.
    pub fn new(settings: &LoggerSettings) -> LoggerResult<Self> {
        let defaults = settings.transport_defaults();
        let logger = Self {
            level: AtomicU8::new(settings.level as u8),
            transports: ArcSwap::from_pointee(Vec::new()),
            defaults,
        };

        for declared in &settings.transports {
            let transport = logger.declared_transport(declared)?;
            logger.add(transport)?;
        }

        Ok(logger)
    }

    fn declared_transport(&self, declared: &TransportSettings) -> LoggerResult<Transport> {
        match declared {
            TransportSettings::Console { name, label, level } => Ok(Transport::console(
                self.options_for(name, label, *level),
            )),
            TransportSettings::File {
                name,
                path,
                label,
                level,
            } => Transport::file(path, self.options_for(name, label, *level)),
        }
    }

    fn options_for(
        &self,
        name: &Option<String>,
        label: &Option<String>,
        level: Option<LogLevel>,
    ) -> TransportOptions {
        TransportOptions {
            name: name.clone(),
            label: label.clone(),
            level,
            ..self.defaults.clone()
        }
    }

    /// Options carrying this logger's format settings, for building extra
    /// transports that match the declared ones.
    pub fn transport_options(&self) -> TransportOptions {
        self.defaults.clone()
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.level().admits(level)
    }

    /// Attach a transport. Names must be unique.
    pub fn add(&self, transport: Transport) -> LoggerResult<()> {
        let transport = Arc::new(transport);
        let mut duplicate = false;

        self.transports.rcu(|current| {
            duplicate = current.iter().any(|t| t.name() == transport.name());
            if duplicate {
                return Arc::clone(current);
            }
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(Arc::clone(&transport));
            Arc::new(next)
        });

        if duplicate {
            return Err(LoggerError::DuplicateTransport {
                name: transport.name().to_string(),
            });
        }
        Ok(())
    }

    /// Detach the transport called `name`, returning it if present.
    pub fn remove(&self, name: &str) -> Option<Arc<Transport>> {
        let mut removed = None;

        self.transports.rcu(|current| {
            removed = current.iter().find(|t| t.name() == name).cloned();
            Arc::new(
                current
                    .iter()
                    .filter(|t| t.name() != name)
                    .cloned()
                    .collect::<Vec<_>>(),
            )
        });

        removed
    }

    pub fn transport(&self, name: &str) -> Option<Arc<Transport>> {
        self.transports
            .load()
            .iter()
            .find(|t| t.name() == name)
            .cloned()
    }

    /// The transport named `console`, if attached.
    pub fn console(&self) -> Option<Arc<Transport>> {
        self.transport("console")
    }

    pub fn transport_names(&self) -> Vec<String> {
        self.transports
            .load()
            .iter()
            .map(|t| t.name().to_string())
            .collect()
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }
        let transports = self.transports.load();
        for transport in transports.iter().filter(|t| t.admits(level)) {
            transport.write(level, &message);
        }
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("transports", &self.transport_names())
            .finish()
    }
}
