//! # Strava Pro
//!
//! Training Intelligence dashboard host. The dashboard itself is the Leptos
//! application in `strava-pro-ui`; this crate delivers it.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`theme`]: Brand colors and font stack rendered as `/theme.css`
//! - [`server`]: Axum host for the built dashboard, theme and health probes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use strava_pro::{AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     strava_pro::serve(AppState::new(&config)?).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod server;
pub mod theme;

pub use config::{
    generate_default_config, Config, ConfigError, LoggingConfig, ServerConfig, ThemeConfig,
};

pub use server::{build_router, serve, AppState, ServerError, ServerResult};

pub use theme::{HexColor, Theme, ThemeError};
