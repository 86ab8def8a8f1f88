//! Configuration module
//!
//! Settings are layered, lowest precedence first: built-in defaults, a config
//! file (YAML or JSON), `CEST_*` environment variables, then whatever the
//! embedding program sets explicitly.

mod env;
mod file;

pub use env::{print_env_help, EnvBuilder, EnvConfig, EnvGuard};
pub use file::ConfigFile;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::Path;

use crate::output::ResultFormatter;
use crate::utils::LogLevel;

/// When to emit ANSI colors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" | "on" | "true" => Some(ColorMode::Always),
            "never" | "off" | "false" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve `Auto` against the current stdout
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Settings for a test run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Color policy for reports
    pub color: ColorMode,

    /// Diagnostic log level (reports are unaffected)
    pub log_level: LogLevel,

    /// Print a closing "N passed, M failed" line
    pub summary: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            log_level: LogLevel::Warn,
            summary: true,
        }
    }
}

impl SuiteConfig {
    /// Load from the config file named by `CEST_CONFIG` (or the first one
    /// found in the standard locations), then apply environment overrides
    pub fn load() -> Result<Self> {
        let env = EnvConfig::load();
        let path = env.config_file.clone();
        Self::load_from(path.as_deref().map(Path::new), &env)
    }

    /// Load from an explicit file (or the standard locations when `None`),
    /// then apply `env`
    pub fn load_from(path: Option<&Path>, env: &EnvConfig) -> Result<Self> {
        let file = match path {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::load_default()?,
        };
        let mut config = file.suite;
        env.apply_to(&mut config);
        Ok(config)
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    /// Report formatter matching the color policy
    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new().with_color(self.color.enabled())
    }
}
