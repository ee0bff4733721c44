use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use mcp_redis_tools::config::ServerConfig;
use mcp_redis_tools::connection::RedisConnectionProvider;
use mcp_redis_tools::server::RedisToolServer;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

/// MCP server exposing Redis commands as agent tools
#[derive(Parser)]
#[command(name = "mcp-redis-tools", version, about)]
struct Cli {
    /// Redis connection URL.
    /// Example: redis://127.0.0.1:6379
    #[arg(long)]
    url: Option<String>,

    /// Read the Redis URL from an environment variable.
    /// Example: --url-env REDIS_URL
    #[arg(long)]
    url_env: Option<String>,

    /// Expose only the raw execute tools (same as LITE_MODE=true)
    #[arg(long)]
    lite: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let url = match (cli.url, cli.url_env) {
        (Some(url), _) => url,
        (None, Some(env_name)) => match std::env::var(&env_name) {
            Ok(url) => {
                tracing::info!(env = env_name.as_str(), "Read Redis URL from environment variable");
                url
            }
            Err(_) => bail!("Environment variable '{env_name}' is not set"),
        },
        (None, None) => {
            tracing::info!("No URL provided, defaulting to redis://127.0.0.1:6379");
            "redis://127.0.0.1:6379".to_string()
        }
    };

    let client = redis::Client::open(url.as_str())
        .map_err(|e| anyhow::anyhow!("Invalid Redis URL '{}': {}", redact_url(&url), e))?;

    let conn = redis::aio::ConnectionManager::new(client)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot connect to '{}': {}", redact_url(&url), e))?;

    let mut config = ServerConfig::from_env();
    if cli.lite {
        config.lite_mode = true;
    }

    let provider = RedisConnectionProvider::new(conn, redact_url(&url));
    tracing::info!(
        url = %provider.url_redacted,
        lite_mode = config.lite_mode,
        "Starting mcp-redis-tools server"
    );

    let service = RedisToolServer::new(Arc::new(provider), &config);
    let running = service.serve(stdio()).await?;
    running.waiting().await?;

    Ok(())
}

fn redact_url(url_str: &str) -> String {
    match url::Url::parse(url_str) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => url_str.to_string(),
    }
}
