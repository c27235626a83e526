//! Strava Pro
//!
//! Command-line entry point for the dashboard host:
//! - Serve the built dashboard and its theme
//! - Print the generated theme stylesheet
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strava_pro::{generate_default_config, AppState, Config, LoggingConfig, Theme};

#[derive(Parser)]
#[command(name = "strava-pro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Training Intelligence dashboard host")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard
    Serve {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory containing the built dashboard
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the theme stylesheet served at /theme.css
    Theme {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            static_dir,
        } => {
            let (mut config, source) = load_config(config)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = dir;
            }

            init_logging(&config.logging);
            tracing::info!("Starting Strava Pro v{}", env!("CARGO_PKG_VERSION"));
            log_config_source(source.as_deref());
            tracing::info!("Serving dashboard from {:?}", config.server.static_dir);

            let state = AppState::new(&config)?;
            strava_pro::serve(state).await?;
        }

        Commands::Theme { config } => {
            let (config, source) = load_config(config)?;
            init_logging(&config.logging);
            log_config_source(source.as_deref());

            let theme = Theme::from_config(&config.theme)?;
            print!("{}", theme.to_css());
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Explicit file or the first one found in the standard locations, with env
/// overrides applied. A file that fails to load aborts startup.
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    match explicit.or_else(|| Config::find_file(&Config::default_paths())) {
        Some(path) => {
            let config = Config::load_with_env(&path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            Ok((config, Some(path)))
        }
        None => {
            let config = Config::from_env().context("reading config from environment")?;
            Ok((config, None))
        }
    }
}

fn log_config_source(source: Option<&Path>) {
    match source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("No config file found; using defaults with environment overrides"),
    }
}

/// Initialize tracing on stderr; `RUST_LOG` wins over the configured level
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("strava_pro={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
