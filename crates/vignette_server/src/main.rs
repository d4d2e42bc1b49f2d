use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vignette_server::{AppConfig, AppState, build_workflow, init_logging, router};

#[derive(Parser, Debug)]
#[command(author, version, about = "Vignette illustrated-story server", long_about = None)]
struct Args {
    /// Configuration file (default: ./vignette.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log at debug level (overrides LOG_LEVEL)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.verbose {
        config.log_level = "debug".to_string();
    }

    init_logging(&config.log_level, config.log_json)?;
    info!(?config, "Starting Vignette server");

    let workflow = build_workflow(&config).await?;
    let app = router(AppState::new(workflow));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
