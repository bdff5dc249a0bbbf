//! Shared helpers for injection tests.

use injected_logger::{DecoratorOptions, LoggerInjector, LoggerSettings, StaticEnv};

/// Environment with `NODE_ENV` set to `value`.
pub fn node_env(value: &str) -> StaticEnv {
    StaticEnv::new().with("NODE_ENV", value)
}

/// Environment with nothing set.
pub fn empty_env() -> StaticEnv {
    StaticEnv::new()
}

/// Mirrors `logger(settings, options)` with an injected environment.
pub fn injector(
    settings: Option<LoggerSettings>,
    options: Option<DecoratorOptions>,
    env: StaticEnv,
) -> LoggerInjector {
    injected_logger::logger(settings, options).with_env(env)
}
