//! Logger injector: resolves mode and label, builds the logger, fills the slot.

use std::fmt;
use std::sync::Arc;

use crate::config::schema::{DecoratorOptions, InjectorConfig, LoggerSettings};
use crate::inject::class::ClassDescriptor;
use crate::inject::env::{Environment, ProcessEnv};
use crate::inject::registry::LoggerRegistry;
use crate::logger::{Logger, LoggerResult, SharedLogger, Transport};

/// Whether an injected logger writes to the console or discards everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionMode {
    Active,
    Disabled,
}

impl fmt::Display for InjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectionMode::Active => f.write_str("active"),
            InjectionMode::Disabled => f.write_str("disabled"),
        }
    }
}

/// Build an injector from optional settings and options.
///
/// ```
/// use injected_logger::{logger, DecoratorOptions};
///
/// struct Checkout;
///
/// let log = logger(None, Some(DecoratorOptions::label("svc")))
///     .attach_to::<Checkout>("logger")
///     .unwrap();
/// log.info("ready");
/// ```
pub fn logger(settings: Option<LoggerSettings>, options: Option<DecoratorOptions>) -> LoggerInjector {
    LoggerInjector::new(settings.unwrap_or_default(), options.unwrap_or_default())
}

/// Attaches a configured [`Logger`] to a class-scoped slot.
#[derive(Clone)]
pub struct LoggerInjector {
    settings: LoggerSettings,
    options: DecoratorOptions,
    env: Arc<dyn Environment>,
}

impl LoggerInjector {
    pub fn new(settings: LoggerSettings, options: DecoratorOptions) -> Self {
        Self {
            settings,
            options,
            env: Arc::new(ProcessEnv),
        }
    }

    /// Injector from a loaded (and validated) configuration.
    pub fn from_config(config: InjectorConfig) -> Self {
        Self::new(config.settings, config.options)
    }

    /// Replace the ambient environment lookup.
    pub fn with_env(mut self, env: impl Environment + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    pub fn settings(&self) -> &LoggerSettings {
        &self.settings
    }

    pub fn options(&self) -> &DecoratorOptions {
        &self.options
    }

    /// Read the ambient variable and compare it with the disable trigger.
    pub fn mode(&self) -> InjectionMode {
        let ambient = self.env.var(self.options.env_var_name());
        if ambient.as_deref() == Some(self.options.disable_trigger()) {
            InjectionMode::Disabled
        } else {
            InjectionMode::Active
        }
    }

    /// Explicit label, else the class name, else the short type name.
    pub fn label_for(&self, class: &ClassDescriptor) -> String {
        self.options
            .label
            .clone()
            .unwrap_or_else(|| class.display_name().to_string())
    }

    /// Build a fresh logger for `class` without touching any slot.
    pub fn build(&self, class: &ClassDescriptor) -> LoggerResult<Logger> {
        let mode = self.mode();
        self.build_in_mode(class, mode)
    }

    fn build_in_mode(&self, class: &ClassDescriptor, mode: InjectionMode) -> LoggerResult<Logger> {
        match mode {
            InjectionMode::Active => {
                let logger = Logger::new(&self.settings)?;
                let label = self.label_for(class);
                logger.add(Transport::console(
                    logger.transport_options().with_label(label),
                ))?;
                Ok(logger)
            }
            InjectionMode::Disabled => {
                let logger = Logger::new(&self.settings)?;
                logger.add(Transport::discard())?;
                Ok(logger)
            }
        }
    }

    /// Fill `member` on `class` in the process-wide registry.
    ///
    /// The first call for a slot builds the logger; later calls return the
    /// same `Arc`.
    pub fn attach(&self, class: &ClassDescriptor, member: &str) -> LoggerResult<SharedLogger> {
        self.attach_in(LoggerRegistry::global(), class, member)
    }

    pub fn attach_to<T: ?Sized + 'static>(&self, member: &str) -> LoggerResult<SharedLogger> {
        self.attach(&ClassDescriptor::of::<T>(), member)
    }

    /// Fill `member` on `class` in a caller-owned registry.
    pub fn attach_in(
        &self,
        registry: &LoggerRegistry,
        class: &ClassDescriptor,
        member: &str,
    ) -> LoggerResult<SharedLogger> {
        registry.get_or_try_insert(class, member, || {
            let mode = self.mode();
            let logger = self.build_in_mode(class, mode)?;

            tracing::debug!(
                class = class.type_name(),
                member,
                mode = %mode,
                label = %self.label_for(class),
                transports = ?logger.transport_names(),
                "Logger attached"
            );
            Ok(Arc::new(logger))
        })
    }
}

impl Default for LoggerInjector {
    fn default() -> Self {
        Self::new(LoggerSettings::default(), DecoratorOptions::default())
    }
}

impl fmt::Debug for LoggerInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerInjector")
            .field("settings", &self.settings)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
