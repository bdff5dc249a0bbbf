//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML/JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → InjectorConfig (validated, immutable)
//!     → LoggerInjector::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Settings are opaque to the injector and forwarded to `Logger::new`

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::DecoratorOptions;
pub use schema::InjectorConfig;
pub use schema::LoggerSettings;
pub use schema::TransportSettings;
pub use validation::{validate_config, ValidationError};
