//! Ambient environment lookup.

use std::collections::HashMap;

/// Source of process-wide string settings such as `NODE_ENV`.
pub trait Environment: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of variables, independent of the process environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for StaticEnv {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .fold(StaticEnv::new(), |env, (key, value)| env.with(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_env_lookup() {
        let env = StaticEnv::from([("NODE_ENV", "production")]);
        assert_eq!(env.var("NODE_ENV").as_deref(), Some("production"));
        assert_eq!(env.var("RUST_LOG"), None);
    }

    #[test]
    fn test_process_env_missing_var() {
        assert_eq!(ProcessEnv.var("INJECTED_LOGGER_SURELY_UNSET_VAR"), None);
    }
}
