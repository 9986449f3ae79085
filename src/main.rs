use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wikigate::api::{AppState, create_router};
use wikigate::settings::Settings;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Wikigate - authenticated proxy for the wiki backend."
)]
struct Cli {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "WIKIGATE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the HTTP listener to
    #[arg(long, env = "WIKIGATE_PORT", default_value_t = 3000)]
    port: u16,

    /// Override the backend base URL (takes precedence over the
    /// PYTHON_BACKEND_HOST / SERVER_BASE_URL environment chain)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Comma-separated list of allowed CORS origins
    #[arg(long, env = "WIKIGATE_ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wikigate=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let settings = Settings {
        host: cli.host,
        port: cli.port,
        backend_url: cli
            .backend_url
            .unwrap_or_else(Settings::backend_url_from_env),
        allowed_origins: cli.allowed_origins,
    };
    info!(backend_url = %settings.backend_url, "resolved backend target");

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", settings.host, settings.port))?;

    let state = AppState::new(settings);
    let router = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    axum::serve(listener, router)
        .await
        .context("server exited with error")?;

    Ok(())
}
