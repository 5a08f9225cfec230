//! Configuration module for memlimit.
//!
//! Only presentation is configurable. The probed cgroup paths and the v1
//! sentinel are fixed constants in [`crate::system`].
//!
//! # Example
//!
//! ```rust,ignore
//! use memlimit::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Output: {:?}", config.output.format);
//! ```

mod error;
mod logging;
mod output;
mod parse;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use output::{OutputConfig, OutputFormat};
pub use parse::{ProcessEnv, Vars};

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&ProcessEnv)
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars(vars: &impl Vars) -> Result<Self, ConfigError> {
        Ok(Self {
            logging: LoggingConfig::from_vars(vars)?,
            output: OutputConfig::from_vars(vars)?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::debug;

        debug!("Configuration loaded:");
        debug!("  Log filter: {}", self.logging.filter);
        debug!("  Log format: {:?}", self.logging.format);
        debug!("  Output: {:?}", self.output.format);
    }
}
