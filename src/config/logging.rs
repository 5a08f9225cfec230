//! Logging configuration.

use std::str::FromStr;

use super::parse::{env_or, env_parse, ProcessEnv, Vars};
use super::ConfigError;

/// Log line format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable `tracing_subscriber::fmt` output.
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err("expected: text, json".to_string()),
        }
    }
}

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG).
    pub filter: String,
    /// Service name for structured logging.
    pub service_name: String,
    /// Output format (from LOG_FORMAT).
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// Priority: LOG_LEVEL > RUST_LOG > default
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error
    /// RUST_LOG accepts full tracing filter syntax: memlimit=debug
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&ProcessEnv)
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars(vars: &impl Vars) -> Result<Self, ConfigError> {
        let service_name = env_or(vars, "SERVICE_NAME", "memlimit");
        if service_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "SERVICE_NAME".into(),
                message: "must not be blank".into(),
            });
        }

        Ok(Self {
            filter: Self::resolve_log_filter(vars.var("LOG_LEVEL"), vars.var("RUST_LOG")),
            service_name,
            format: env_parse(vars, "LOG_FORMAT", LogFormat::Text)?,
        })
    }

    /// Resolve log filter.
    ///
    /// Priority: LOG_LEVEL > RUST_LOG > default (warn). Logs go to stderr and
    /// the tool is usually scripted, so the default stays quiet.
    fn resolve_log_filter(log_level: Option<String>, rust_log: Option<String>) -> String {
        if let Some(level) = log_level {
            let level = level.to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {
                    return format!("memlimit={}", level);
                }
                _ => {
                    // Invalid level, fall through to RUST_LOG
                    eprintln!(
                        "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                        level
                    );
                }
            }
        }

        if let Some(filter) = rust_log.filter(|f| !f.is_empty()) {
            return filter;
        }

        "memlimit=warn".to_string()
    }
}
