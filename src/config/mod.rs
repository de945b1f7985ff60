//! Configuration management for hlsl-syntax
//!
//! Configuration comes from a TOML file and command-line arguments. Every
//! field has a default, so a partial (or absent) file is valid.
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};
use crate::symbols::SymbolTable;
use crate::theme::{DEFAULT_THEME_NAME, Rgb};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// History configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Language configuration
    #[serde(default)]
    pub language: LanguageConfig,

    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Display and output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Output format for `tokenize` (ansi, text, json, table)
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Enable syntax highlighting in the REPL
    #[serde(default = "default_syntax_highlighting")]
    pub syntax_highlighting: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Source re-rendered with theme colors
    Ansi,

    /// One token per line: `start..end  class  "text"`
    Text,

    /// Tokens and end state per line, as JSON
    Json,

    /// Box-drawn table of tokens
    Table,
}

/// Command history configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    #[serde(default = "default_max_history_size")]
    pub max_size: usize,

    /// Path to history file
    #[serde(default = "default_history_file")]
    pub file_path: PathBuf,

    /// Enable history persistence
    #[serde(default = "default_persist_history")]
    pub persist: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Language configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Extra aggregate type names highlighted as custom types
    #[serde(default)]
    pub custom_types: Vec<String>,
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme name shown in `theme` output
    #[serde(default = "default_theme_name")]
    pub name: String,

    /// Scope to hex color overrides
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
}

// Default value functions
fn default_format() -> OutputFormat {
    OutputFormat::Ansi
}

fn default_color_output() -> bool {
    true
}

fn default_syntax_highlighting() -> bool {
    true
}

fn default_max_history_size() -> usize {
    1000
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hlsl_syntax_history")
}

fn default_persist_history() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

fn default_theme_name() -> String {
    DEFAULT_THEME_NAME.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color_output: default_color_output(),
            syntax_highlighting: default_syntax_highlighting(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_history_size(),
            file_path: default_history_file(),
            persist: default_persist_history(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            rules: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// When `path` is `None` the default location is used, and a missing
    /// default file simply yields the default configuration. An explicitly
    /// named file must exist.
    ///
    /// # Arguments
    /// * `path` - Optional path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded and validated configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hlsl-syntax")
            .join("config.toml")
    }

    /// Save configuration to a file
    ///
    /// Parent directories are created as needed.
    ///
    /// # Arguments
    /// * `path` - Path where to save the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(invalid("history.max_size", "0"));
        }

        for name in &self.language.custom_types {
            if !is_identifier(name) {
                return Err(invalid("language.custom_types", name));
            }
        }

        if self.theme.name.trim().is_empty() {
            return Err(invalid("theme.name", &self.theme.name));
        }

        for (scope, hex) in &self.theme.rules {
            if Rgb::parse_hex(hex).is_none() {
                return Err(invalid(&format!("theme.rules.{scope}"), hex));
            }
        }

        Ok(())
    }

    /// Symbol table for this configuration
    ///
    /// Returns the built-in table unless custom types are configured.
    pub fn symbol_table(&self) -> SymbolTable {
        if self.language.custom_types.is_empty() {
            SymbolTable::default()
        } else {
            SymbolTable::with_custom_types(self.language.custom_types.iter().cloned())
        }
    }
}

fn invalid(field: &str, value: &str) -> crate::error::HlslError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    bytes
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl OutputFormat {
    /// Check if format is meant for machines
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }

    /// Check if format emits terminal colors when enabled
    pub fn uses_color(&self) -> bool {
        matches!(self, OutputFormat::Ansi | OutputFormat::Json)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Ansi => "ansi",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ansi" => Ok(OutputFormat::Ansi),
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(ConfigError::InvalidValue {
                field: "format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
