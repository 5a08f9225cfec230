//! Result output configuration.

use std::str::FromStr;

use super::parse::{env_parse, ProcessEnv, Vars};
use super::ConfigError;
use crate::system::{format_bytes, ResolvedLimit};

/// How the resolved limit is printed on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain byte count, e.g. `1073741824`.
    Bytes,
    /// Human-readable size and source, e.g. `1.0 GB (cgroup_v2)`.
    Human,
    /// `{"bytes":1073741824,"source":"cgroup_v2","display":"1.0 GB"}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bytes" => Ok(Self::Bytes),
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err("expected: bytes, human, json".to_string()),
        }
    }
}

impl OutputFormat {
    /// Render a resolved limit in this format.
    pub fn render(&self, limit: &ResolvedLimit) -> String {
        match self {
            Self::Bytes => limit.bytes.to_string(),
            Self::Human => limit.to_string(),
            Self::Json => serde_json::json!({
                "bytes": limit.bytes,
                "source": limit.source,
                "display": format_bytes(limit.bytes),
            })
            .to_string(),
        }
    }
}

/// Output configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct OutputConfig {
    /// Output format (from OUTPUT_FORMAT).
    pub format: OutputFormat,
}

impl OutputConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&ProcessEnv)
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars(vars: &impl Vars) -> Result<Self, ConfigError> {
        Ok(Self {
            format: env_parse(vars, "OUTPUT_FORMAT", OutputFormat::Bytes)?,
        })
    }
}
