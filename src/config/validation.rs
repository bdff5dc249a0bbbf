//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty labels, triggers and variable names
//! - Detect transports that would collide at construction, including the
//!   `console` and `discard` names the injector adds itself
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: InjectorConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{DecoratorOptions, InjectorConfig, LoggerSettings, TransportSettings};

/// A single semantic problem found in an [`InjectorConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("options.label must not be empty")]
    EmptyLabel,

    #[error("options.test_environment must not be empty")]
    EmptyTestEnvironment,

    #[error("options.env_var must not be empty")]
    EmptyEnvVar,

    #[error("transport {index}: file path must not be empty")]
    EmptyFilePath { index: usize },

    #[error("transport {index}: name must not be empty")]
    EmptyTransportName { index: usize },

    #[error("transport name '{0}' is declared more than once")]
    DuplicateTransport(String),

    #[error("transport name '{0}' is reserved for the injected transport")]
    ReservedTransportName(String),
}

/// Names of the transports the injector attaches on its own.
pub const RESERVED_TRANSPORT_NAMES: [&str; 2] = ["console", "discard"];

/// Check `config` for semantic errors.
pub fn validate_config(config: &InjectorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    validate_options(&config.options, &mut errors);
    validate_settings(&config.settings, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_options(options: &DecoratorOptions, errors: &mut Vec<ValidationError>) {
    if is_blank(&options.label) {
        errors.push(ValidationError::EmptyLabel);
    }
    if is_blank(&options.test_environment) {
        errors.push(ValidationError::EmptyTestEnvironment);
    }
    if is_blank(&options.env_var) {
        errors.push(ValidationError::EmptyEnvVar);
    }
}

fn validate_settings(settings: &LoggerSettings, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();

    for (index, transport) in settings.transports.iter().enumerate() {
        let name = match transport {
            TransportSettings::Console { name, .. } => name,
            TransportSettings::File { name, path, .. } => {
                if path.as_os_str().is_empty() {
                    errors.push(ValidationError::EmptyFilePath { index });
                }
                name
            }
        };
        if is_blank(name) {
            errors.push(ValidationError::EmptyTransportName { index });
            continue;
        }

        let effective = transport.effective_name();
        if RESERVED_TRANSPORT_NAMES.contains(&effective) {
            errors.push(ValidationError::ReservedTransportName(effective.to_string()));
            continue;
        }
        if !seen.insert(effective) {
            errors.push(ValidationError::DuplicateTransport(effective.to_string()));
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&InjectorConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = InjectorConfig::default();
        config.options.label = Some(" ".into());
        config.options.env_var = Some(String::new());
        config.settings.transports = vec![
            TransportSettings::File {
                name: None,
                path: PathBuf::new(),
                label: None,
                level: None,
            },
            TransportSettings::File {
                name: None,
                path: PathBuf::from("/tmp/b.log"),
                label: None,
                level: None,
            },
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyLabel,
                ValidationError::EmptyEnvVar,
                ValidationError::EmptyFilePath { index: 0 },
                ValidationError::DuplicateTransport("file".into()),
            ]
        );
    }

    #[test]
    fn test_named_transports_do_not_collide() {
        let mut config = InjectorConfig::default();
        config.settings.transports = vec![
            TransportSettings::Console {
                name: Some("stdout".into()),
                label: None,
                level: None,
            },
            TransportSettings::Console {
                name: Some("stderr-copy".into()),
                label: None,
                level: None,
            },
        ];

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_injected_transport_names_are_reserved() {
        let mut config = InjectorConfig::default();
        config.settings.transports = vec![
            TransportSettings::Console {
                name: None,
                label: None,
                level: None,
            },
            TransportSettings::File {
                name: Some("discard".into()),
                path: PathBuf::from("/tmp/a.log"),
                label: None,
                level: None,
            },
        ];

        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![
                ValidationError::ReservedTransportName("console".into()),
                ValidationError::ReservedTransportName("discard".into()),
            ]
        );
    }
}
