//! # bookshelfd — bookshelf daemon
//!
//! Composition root that wires the store and the HTTP adapter together and
//! starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Load the seed document (bundled, or from the configured path) and build
//!   the in-memory store; a malformed seed aborts startup
//! - Construct the application service, injecting the store via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use bookshelf_adapter_http_axum::state::AppState;
use bookshelf_adapter_storage_memory::{InMemoryBookRepository, SeedDocument, SeedError};
use bookshelf_app::services::book_service::BookService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Seed document compiled into the binary, used when no path is configured.
const BUNDLED_SEED: &str = include_str!("../data/books.json");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Store
    let seed = load_seed(&config)?;
    let book_repo = InMemoryBookRepository::from_document(seed);

    // Services
    let book_service = BookService::new(book_repo);

    // HTTP
    let state = AppState::new(book_service);
    let app = bookshelf_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "bookshelfd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("bookshelfd stopped");
    Ok(())
}

fn load_seed(config: &Config) -> Result<SeedDocument, SeedError> {
    match &config.seed.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading seed document");
            SeedDocument::from_file(path)
        }
        None => {
            tracing::info!("loading bundled seed document");
            SeedDocument::from_json(BUNDLED_SEED)
        }
    }
}

/// Resolve once SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
