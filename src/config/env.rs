//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

use super::{ColorMode, SuiteConfig};
use crate::utils::LogLevel;

/// Environment variable prefix
const ENV_PREFIX: &str = "CEST";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Color mode from CEST_COLOR
    pub color: Option<ColorMode>,
    /// Log level from CEST_LOG
    pub log_level: Option<LogLevel>,
    /// Summary line from CEST_SUMMARY
    pub summary: Option<bool>,
    /// Config file from CEST_CONFIG
    pub config_file: Option<String>,
    /// NO_COLOR is set to a non-empty value
    pub no_color: bool,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            color: get_env("COLOR").and_then(|v| ColorMode::from_str(&v)),
            log_level: get_env("LOG").and_then(|v| LogLevel::from_str(&v)),
            summary: get_env_bool("SUMMARY"),
            config_file: get_env("CONFIG"),
            no_color: env::var("NO_COLOR").is_ok_and(|v| !v.is_empty()),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.color.is_some()
            || self.log_level.is_some()
            || self.summary.is_some()
            || self.config_file.is_some()
            || self.no_color
    }

    /// Override `config` with every value present in the environment
    ///
    /// `NO_COLOR` wins over `CEST_COLOR`.
    pub fn apply_to(&self, config: &mut SuiteConfig) {
        if let Some(color) = self.color {
            config.color = color;
        }
        if self.no_color {
            config.color = ColorMode::Never;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(summary) = self.summary {
            config.summary = summary;
        }
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    /// Create a new environment builder
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set color mode
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_COLOR"), color.into()));
        self
    }

    /// Set log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_LOG"), level.into()));
        self
    }

    /// Set summary
    pub fn summary(mut self, summary: bool) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_SUMMARY"), summary.to_string()));
        self
    }

    /// Set config file
    pub fn config_file(mut self, path: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_CONFIG"), path.into()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

/// Print all CEST environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_COLOR     Color mode (auto, always, never)");
    println!("  {ENV_PREFIX}_LOG       Diagnostic log level (trace, debug, info, warn, error)");
    println!("  {ENV_PREFIX}_SUMMARY   Print the closing summary line (true/false)");
    println!("  {ENV_PREFIX}_CONFIG    Path to configuration file");
    println!("  NO_COLOR       Disable colors when set to any non-empty value");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_COLOR=never");
    println!("  cest-demo run --parallel");
}
