//! Router assembly and the connection loop.
//!
//! `axum::serve` runs every accepted connection on its own tokio task, so a
//! slow upload or poll only holds its own task. The message log is the one
//! shared object and is reached through `MessageRepository`.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    config::ServerConfig,
    error::ServerError,
    infrastructure::{repository::InMemoryMessageRepository, storage::UploadStorage},
    ui::{handler, presenter::UPLOADS_ROUTE, signal::shutdown_signal, state::AppState},
};

/// Build the application router.
///
/// Uploads are served from the storage directory; anything unmatched falls
/// back to static files under `config.public_dir`.
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let uploads = ServeDir::new(state.uploads.dir());

    Router::new()
        .route("/", get(handler::index))
        .route("/get_messages", get(handler::get_messages))
        .route("/send", post(handler::send_message))
        .route("/api/messages", get(handler::api_messages))
        .route("/api/health", get(handler::health_check))
        .nest_service(UPLOADS_ROUTE, uploads)
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(DefaultBodyLimit::max(config.max_body_bytes()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the chat server until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let uploads = UploadStorage::new(&config.upload_dir);
    uploads.ensure_dir().await?;

    let state = Arc::new(AppState::new(
        Arc::new(InMemoryMessageRepository::new()),
        uploads,
    )?);
    let app = build_router(state, &config);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|_| ServerError::InvalidAddress(config.bind_address()))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("Chat server listening on http://{}", addr);
    tracing::info!("Storing uploads in {:?}", config.upload_dir);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Chat server stopped");
    Ok(())
}
