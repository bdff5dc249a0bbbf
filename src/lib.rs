//! Class-scoped logger injection.
//!
//! A [`LoggerInjector`] builds a [`Logger`] from [`LoggerSettings`] and
//! attaches it to a slot shared by every value of a type. When the ambient
//! `NODE_ENV` (or a configured variable) equals the test trigger, the logger
//! is built with a discard transport instead of the console.
//!
//! ```text
//! logger(settings, options)
//!     → LoggerInjector::attach(class, member)
//!     → Active:   Logger + console transport tagged with the label
//!     → Disabled: Logger + discard transport
//!     → Arc<Logger> stored once per (type, member)
//! ```

pub mod config;
pub mod inject;
pub mod logger;

pub use config::schema::{DecoratorOptions, InjectorConfig, LoggerSettings};
pub use inject::{
    logger, ClassDescriptor, Environment, InjectLogger, InjectionMode, LoggerInjector,
    LoggerRegistry, ProcessEnv, StaticEnv,
};
pub use logger::{
    LogFormat, LogLevel, Logger, LoggerError, MemoryBuffer, SharedLogger, Transport,
    TransportKind, TransportOptions,
};
