//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::Html,
};

use crate::{
    infrastructure::dto::http::{FeedDto, FeedQuery},
    ui::{
        error::ApiError,
        presenter::{Feed, FeedRenderer},
        state::AppState,
    },
    usecase::{FetchFeedUseCase, SendMessageCommand, SendMessageUseCase, SendOutcome},
};

/// Chat page shell
const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// Chat page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let messages = state.repository.count().await;
    Json(serde_json::json!({"status": "ok", "messages": messages}))
}

/// Poll the feed as an HTML fragment (`GET /get_messages?user=<viewer>`)
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Result<Html<String>, ApiError> {
    let feed = build_feed(&state, &query.user).await;
    let html = state
        .feed_template
        .render(&feed)
        .map_err(|e| ApiError::Internal(format!("Failed to render feed: {e}")))?;
    Ok(Html(html))
}

/// Poll the feed as JSON (`GET /api/messages?user=<viewer>`)
pub async fn api_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Json<FeedDto> {
    let feed = build_feed(&state, &query.user).await;
    Json(FeedDto::from(&feed))
}

async fn build_feed(state: &AppState, viewer: &str) -> Feed {
    let usecase = FetchFeedUseCase::new(state.repository.clone());
    let snapshot = usecase.execute(viewer).await;
    FeedRenderer::render(&snapshot, viewer)
}

/// Submit a message (`POST /send`, multipart `username`, `message`, `file`)
///
/// The file field is streamed to disk as soon as it arrives. The message is
/// appended only after every field was read successfully.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<StatusCode, ApiError> {
    let usecase = SendMessageUseCase::new(state.repository.clone(), state.uploads.clone());
    let mut command = SendMessageCommand::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "username" => {
                command.username = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read username: {e}"))
                })?);
            }
            "message" => {
                command.text = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read message: {e}"))
                })?);
            }
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                if file_name.is_empty() {
                    // no file chosen in the form
                    continue;
                }
                if let Some(stored) = usecase.store_attachment(&file_name, field).await? {
                    tracing::info!(
                        "Stored upload '{}' ({} bytes)",
                        stored.attachment.stored_name,
                        stored.bytes_written
                    );
                    command.attachment = Some(stored.attachment);
                }
            }
            other => {
                tracing::debug!("Ignoring multipart field '{}'", other);
            }
        }
    }

    if usecase.execute(command).await == SendOutcome::Ignored {
        tracing::debug!("Empty submission acknowledged without a new message");
    }

    Ok(StatusCode::OK)
}
