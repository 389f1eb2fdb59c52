// HTML Renderer
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use html_renderer::config::{constants::DEFAULT_LOG_FILTER, load_config};
use html_renderer::server::ContentServer;

/// Store HTML from text, files, uploads or samples and serve it for preview
#[derive(Debug, Parser)]
#[command(name = "html-renderer", version, about)]
struct Args {
    /// Config file (defaults to ~/.html-renderer/config.toml when present)
    #[arg(long, short = 'c', env = "HTML_RENDERER_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:8080
    #[arg(long, env = "HTML_RENDERER_BIND")]
    bind: Option<String>,

    /// Directory holding sample .html files
    #[arg(long, env = "HTML_RENDERER_SAMPLES_DIR")]
    samples_dir: Option<PathBuf>,

    /// Allowed CORS origin; repeat for several
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;

    // Command line and environment win over the config file
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }
    if let Some(dir) = args.samples_dir {
        config.server.samples_dir = dir;
    }
    if !args.cors_origins.is_empty() {
        config.server.cors_origins = args.cors_origins;
    }
    config.validate()?;

    ContentServer::new(config.server).serve().await
}
