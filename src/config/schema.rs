//! Configuration schema definitions.
//!
//! All types derive Serde traits so an injector can be described in a TOML
//! or JSON file as well as built in code.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logger::{LogFormat, LogLevel, TransportOptions};

/// Default value of the ambient variable that switches loggers off.
pub const DEFAULT_TEST_ENVIRONMENT: &str = "test";

/// Default name of the ambient variable consulted at attach time.
pub const DEFAULT_ENV_VAR: &str = "NODE_ENV";

/// Root configuration: logger settings plus injection options.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct InjectorConfig {
    /// Forwarded to `Logger::new` unmodified.
    pub settings: LoggerSettings,

    /// Label and disable-switch overrides.
    pub options: DecoratorOptions,
}

/// Options controlling how the injector labels and disables loggers.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DecoratorOptions {
    /// Label for the console transport. Falls back to the type's name.
    pub label: Option<String>,

    /// Ambient value that selects disabled mode (default: "test").
    pub test_environment: Option<String>,

    /// Ambient variable to read (default: "NODE_ENV").
    pub env_var: Option<String>,
}

impl DecoratorOptions {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn test_environment(value: impl Into<String>) -> Self {
        Self {
            test_environment: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn disable_trigger(&self) -> &str {
        self.test_environment
            .as_deref()
            .unwrap_or(DEFAULT_TEST_ENVIRONMENT)
    }

    pub fn env_var_name(&self) -> &str {
        self.env_var.as_deref().unwrap_or(DEFAULT_ENV_VAR)
    }
}

/// Settings handed to the logger constructor.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggerSettings {
    /// Most verbose level that is emitted.
    pub level: LogLevel,

    /// Line format for every transport built from these settings.
    pub format: LogFormat,

    /// ANSI colors on console output.
    pub colorize: bool,

    /// Prefix records with a timestamp.
    pub timestamp: bool,

    /// Transports created together with the logger.
    pub transports: Vec<TransportSettings>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Full,
            colorize: false,
            timestamp: false,
            transports: Vec::new(),
        }
    }
}

impl LoggerSettings {
    pub fn with_level(level: LogLevel) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Format options shared by transports built from these settings.
    pub fn transport_defaults(&self) -> TransportOptions {
        TransportOptions {
            format: self.format,
            colorize: self.colorize,
            timestamp: self.timestamp,
            ..Default::default()
        }
    }
}

/// A transport declared in settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransportSettings {
    Console {
        name: Option<String>,
        label: Option<String>,
        level: Option<LogLevel>,
    },
    File {
        name: Option<String>,
        path: PathBuf,
        label: Option<String>,
        level: Option<LogLevel>,
    },
}

impl TransportSettings {
    /// Name the transport will be attached under.
    pub fn effective_name(&self) -> &str {
        match self {
            TransportSettings::Console { name, .. } => name.as_deref().unwrap_or("console"),
            TransportSettings::File { name, .. } => name.as_deref().unwrap_or("file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DecoratorOptions::default();
        assert_eq!(options.disable_trigger(), "test");
        assert_eq!(options.env_var_name(), "NODE_ENV");
        assert_eq!(LoggerSettings::default().level, LogLevel::Info);
    }

    #[test]
    fn test_minimal_toml() {
        let config: InjectorConfig = toml::from_str(
            r#"
            [settings]
            level = "debug"

            [options]
            label = "billing"
            "#,
        )
        .unwrap();

        assert_eq!(config.settings.level, LogLevel::Debug);
        assert_eq!(config.settings.format, LogFormat::Full);
        assert_eq!(config.options.label.as_deref(), Some("billing"));
        assert_eq!(config.options.test_environment, None);
    }

    #[test]
    fn test_declared_transports() {
        let config: InjectorConfig = toml::from_str(
            r#"
            [[settings.transports]]
            kind = "file"
            path = "/var/log/app.log"
            level = "warn"

            [[settings.transports]]
            kind = "console"
            name = "stdout"
            "#,
        )
        .unwrap();

        assert_eq!(config.settings.transports.len(), 2);
        assert_eq!(config.settings.transports[0].effective_name(), "file");
        assert_eq!(config.settings.transports[1].effective_name(), "stdout");
    }
}
