//! Illusion Note backend
//!
//! Serves the rule-based and generative journal analysis endpoints.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use illusion_note::config::{self, ConfigLayer};
use illusion_note::server;

#[derive(Parser)]
#[command(name = "illusion-note")]
#[command(about = "Journal emotion analysis and response relay")]
struct Args {
    /// Bind host
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Bind port
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// Chat model identifier
    #[arg(long, env = "OPENAI_MODEL")]
    openai_model: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL")]
    openai_base_url: Option<String>,

    /// Config file (defaults to ~/.illusion-note/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

impl Args {
    fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            openai_api_key: self.openai_api_key.clone(),
            openai_model: self.openai_model.clone(),
            openai_base_url: self.openai_base_url.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Resolve values: CLI args > env vars (handled by clap) > config file > defaults
    let config_file = args.config.clone().unwrap_or_else(config::config_path);
    let config = args.layer().or(ConfigLayer::load(&config_file)).finish();

    info!("Illusion Note backend {}", env!("CARGO_PKG_VERSION"));
    info!("Model: {}, API key: {}", config.openai_model, config.masked_api_key());
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; generation requests will return an error result");
    }

    server::run(config).await
}
