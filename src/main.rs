// cupola - portrait-to-orbit image relay for the Gemini API

use anyhow::Result;
use clap::Parser;
use cupola::cli::Args;
use cupola::config::AppConfig;
use cupola::genai::GenAiClient;
use cupola::server::create_router;
use cupola::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load()?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting cupola v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Handle --check flag (validate deployment config and exit)
    if args.check {
        return match config.genai.require_api_key() {
            Ok(_) => {
                info!(
                    "Configuration OK: credential present, model {}, upstream {}",
                    config.genai.model, config.genai.api_base_url
                );
                Ok(())
            }
            Err(e) => {
                warn!("{}", e);
                std::process::exit(1);
            }
        };
    }

    // Phase 4: Build the upstream client
    if config.genai.api_key.is_none() {
        warn!("GENAI_API_KEY is not set; generate requests will return 500");
    }
    let genai_client = GenAiClient::new(&config.genai)?;

    // Phase 5: Build and start HTTP server
    let app = create_router(config.clone(), genai_client)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
