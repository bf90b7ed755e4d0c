//! Bookstore Server - Minimal book catalog REST service

use std::net::SocketAddr;
use std::sync::Arc;

use mongodb::bson::doc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstore_server::{config::AppConfig, create_router, repository::Repository, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("bookstore_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookstore Server v{}", env!("CARGO_PKG_VERSION"));

    // Connect to the document store
    let client = mongodb::Client::with_uri_str(&config.database.url)
        .await
        .expect("Failed to connect to database");
    let database = client.database(&config.database.database);

    // The driver connects lazily; ping so an unreachable store is fatal
    // before the listener binds
    database
        .run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to reach database");

    tracing::info!("Connected to database");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and application state
    let repository = Repository::new(database, &config.database);
    let state = AppState {
        config: Arc::new(config),
        repository: Arc::new(repository),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the store connection before exit
    client.shutdown().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("Shutdown signal received");
}
