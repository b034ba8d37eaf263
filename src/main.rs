//! Bookshelf Server - in-memory Book CRUD API
//!
//! Serves the book endpoints and their Swagger UI documentation.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf_server::{api, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("bookshelf_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Bookshelf Server v{}", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState::new(&config);
    tracing::info!(
        "Book store ready with {} book(s)",
        state.services.books.count().await
    );

    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("API docs at http://{}/swagger/index.html", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
