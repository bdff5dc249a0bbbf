//! Logger injection.
//!
//! # Data Flow
//! ```text
//! logger(settings, options) → LoggerInjector
//!     → env.rs (read NODE_ENV or the configured variable)
//!     → mode: Active | Disabled
//!     → class.rs (label fallback: option → class name → type name)
//!     → Logger::new + console or discard transport
//!     → registry.rs (one Arc<Logger> per type and member)
//! ```
//!
//! # Design Decisions
//! - Attachment happens once per slot; every value of the type shares it
//! - The environment is read through a provider so tests never touch the
//!   real process environment
//! - Construction errors surface from `attach` unchanged

pub mod class;
pub mod env;
pub mod injector;
pub mod registry;

pub use class::ClassDescriptor;
pub use env::{Environment, ProcessEnv, StaticEnv};
pub use injector::{logger, InjectionMode, LoggerInjector};
pub use registry::LoggerRegistry;

use crate::logger::{LoggerResult, SharedLogger};

/// Gives a type a class-scoped logger.
///
/// ```
/// use injected_logger::{DecoratorOptions, InjectLogger, LoggerInjector, LoggerSettings};
///
/// struct PaymentGateway;
///
/// impl InjectLogger for PaymentGateway {
///     fn injector() -> LoggerInjector {
///         LoggerInjector::new(LoggerSettings::default(), DecoratorOptions::label("payments"))
///     }
/// }
///
/// let log = PaymentGateway::logger().unwrap();
/// log.info("gateway ready");
/// assert!(std::sync::Arc::ptr_eq(&log, &PaymentGateway::logger().unwrap()));
/// ```
pub trait InjectLogger: 'static {
    /// Slot name the logger is attached under.
    const LOGGER_MEMBER: &'static str = "logger";

    /// Injector used on first access.
    fn injector() -> LoggerInjector {
        LoggerInjector::default()
    }

    /// Class descriptor for label resolution and slot identity.
    fn class_descriptor() -> ClassDescriptor {
        ClassDescriptor::of::<Self>()
    }

    /// The shared logger, attaching it on first call.
    fn logger() -> LoggerResult<SharedLogger> {
        let class = Self::class_descriptor();
        if let Some(existing) = LoggerRegistry::global().get(&class, Self::LOGGER_MEMBER) {
            return Ok(existing);
        }
        Self::injector().attach(&class, Self::LOGGER_MEMBER)
    }
}
