use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "SOUNDEX_CONFIG";

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Bare codes, one result per line
    #[default]
    Text,
    /// The JSON response envelope
    Json,
}

/// Output settings, loaded from TOML and overridden by flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format
    pub format: OutputFormat,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl CliConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate().map_err(|msg| anyhow!(msg))?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Resolve config from an explicit path, then `SOUNDEX_CONFIG`, then defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line flags on top of the loaded config.
    ///
    /// `format` replaces the configured format in either direction; `pretty`
    /// forces pretty JSON.
    #[must_use]
    pub fn with_flags(mut self, format: Option<OutputFormat>, pretty: bool) -> Self {
        if let Some(format) = format {
            self.format = format;
            if format == OutputFormat::Text {
                self.pretty = false;
            }
        }
        if pretty {
            self.format = OutputFormat::Json;
            self.pretty = true;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.pretty && self.format != OutputFormat::Json {
            return Err("pretty = true requires format = \"json\"".to_string());
        }
        Ok(())
    }
}
