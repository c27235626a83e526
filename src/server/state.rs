//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, ServerConfig};
use crate::server::error::ServerResult;
use crate::theme::Theme;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Host configuration
    pub config: Arc<ServerConfig>,
    /// Rendered `/theme.css`, computed once at startup
    pub theme_css: Arc<str>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by `/health`
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Build state from a loaded config, validating the theme
    pub fn new(config: &Config) -> ServerResult<Self> {
        let theme = Theme::from_config(&config.theme)?;
        Ok(Self::with_theme(config.server.clone(), &theme))
    }

    /// Build state from an already validated theme
    pub fn with_theme(server: ServerConfig, theme: &Theme) -> Self {
        Self {
            config: Arc::new(server),
            theme_css: Arc::from(theme.to_css()),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the built dashboard is present on disk
    pub fn index_present(&self) -> bool {
        self.config.index_path().is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;

    #[test]
    fn test_new_rejects_bad_theme() {
        let config = Config {
            theme: ThemeConfig {
                primary_dark: "#12".to_string(),
                ..ThemeConfig::default()
            },
            ..Config::default()
        };
        assert!(AppState::new(&config).is_err());
    }

    #[test]
    fn test_index_presence() {
        let dir = tempfile::tempdir().unwrap();
        let server = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        let state = AppState::with_theme(server, &Theme::default());
        assert!(!state.index_present());

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(state.index_present());
    }
}
