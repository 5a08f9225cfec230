//! Environment variable parsing utilities.

use std::collections::HashMap;
use std::str::FromStr;

use super::ConfigError;

/// Source of configuration variables.
pub trait Vars {
    /// Value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl Vars for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Vars for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Get variable with default value.
pub fn env_or(vars: &impl Vars, key: &str, default: &str) -> String {
    vars.var(key).unwrap_or_else(|| default.to_string())
}

/// Get optional variable (None if empty or missing).
pub fn env_opt(vars: &impl Vars, key: &str) -> Option<String> {
    vars.var(key).filter(|s| !s.is_empty())
}

/// Parse variable with type conversion.
pub fn env_parse<T: FromStr>(vars: &impl Vars, key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env_opt(vars, key) {
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::Parse {
            key: key.into(),
            value: v,
            error: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Build a variable map from pairs.
#[cfg(test)]
pub(crate) fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
