//! FinCalc server entry point.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fincalc_server::{Server, ServerConfig};

const CONFIG_ENV: &str = "FINCALC_SERVER_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,fincalc_server=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("FinCalc server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::var(CONFIG_ENV)
        .ok()
        .or_else(|| std::env::args().nth(1))
        .unwrap_or_else(|| "config/fincalc.toml".to_string());

    let server_config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    let server = Server::new(server_config);
    server.start().await?;

    Ok(())
}
