//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built dashboard (`index.html`, wasm, css)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("strava-pro-ui/dist")
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Path of the dashboard entry document
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

/// Brand colors and typography fed to the dashboard stylesheet
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_primary_light")]
    pub primary_light: String,

    #[serde(default = "default_primary_dark")]
    pub primary_dark: String,

    #[serde(default = "default_font_sans")]
    pub font_sans: Vec<String>,
}

fn default_primary() -> String {
    "#FC4C02".to_string()
}

fn default_primary_light() -> String {
    "#FF6A2A".to_string()
}

fn default_primary_dark() -> String {
    "#DD4200".to_string()
}

fn default_font_sans() -> Vec<String> {
    vec!["Inter".to_string(), "sans-serif".to_string()]
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            primary_light: default_primary_light(),
            primary_dark: default_primary_dark(),
            font_sans: default_font_sans(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Defaults plus overrides from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_lookup(path, env_lookup)
    }

    /// Load a file, then apply overrides from `lookup`
    pub fn load_with_lookup<F>(path: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load(path)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Standard config locations, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("strava-pro").join("config.toml")),
            Some(PathBuf::from("/etc/strava-pro/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// First existing file among `paths`
    pub fn find_file(paths: &[PathBuf]) -> Option<PathBuf> {
        paths.iter().find(|path| path.exists()).cloned()
    }

    /// Load from default locations or environment.
    ///
    /// A config file that exists but fails to load is an error; defaults are
    /// only used when no file is present.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_from_paths(&Self::default_paths(), env_lookup)
    }

    /// Load the first existing file among `paths`, or defaults when none exists
    pub fn load_from_paths<F>(paths: &[PathBuf], lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::find_file(paths) {
            Some(path) => Self::load_with_lookup(&path, lookup),
            None => Self::from_lookup(lookup),
        }
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(
            self.logging.format.to_ascii_lowercase().as_str(),
            "pretty" | "json"
        ) {
            return Err(ConfigError::Invalid(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                self.logging.format
            )));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        crate::theme::Theme::from_config(&self.theme)
            .map_err(|e| ConfigError::Invalid(format!("theme: {}", e)))?;

        Ok(())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(host) = lookup("STRAVA_PRO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("STRAVA_PRO_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = lookup("STRAVA_PRO_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        // Logging overrides
        if let Some(level) = lookup("STRAVA_PRO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("STRAVA_PRO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Strava Pro Configuration
#
# Environment variables override these settings:
# - STRAVA_PRO_HOST
# - STRAVA_PRO_PORT
# - STRAVA_PRO_STATIC_DIR
# - STRAVA_PRO_LOG_LEVEL
# - STRAVA_PRO_LOG_FORMAT

[server]
# Dashboard host
host = "0.0.0.0"

# Dashboard port
port = 8084

# Directory containing the built dashboard (trunk build output)
static_dir = "strava-pro-ui/dist"

# Request timeout in seconds
request_timeout_secs = 30

[theme]
# Brand colors (#RRGGBB or #RGB)
primary = "#FC4C02"
primary_light = "#FF6A2A"
primary_dark = "#DD4200"

# Sans-serif font stack, most preferred first
font_sans = ["Inter", "sans-serif"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}
