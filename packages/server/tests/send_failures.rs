//! Router-level tests for submissions that must not reach the message log.
//!
//! These drive the router in-process with `tower::ServiceExt::oneshot`, so
//! storage failures can be arranged without a running server.

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use engawa_server::{
    ServerConfig,
    domain::MessageRepository,
    infrastructure::{repository::InMemoryMessageRepository, storage::UploadStorage},
    ui::{build_router, state::AppState},
};
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "engawa-test-boundary";

fn create_app(uploads: UploadStorage, public_dir: &Path) -> (Arc<AppState>, Router) {
    let state = Arc::new(
        AppState::new(Arc::new(InMemoryMessageRepository::new()), uploads)
            .expect("Failed to build state"),
    );
    let config = ServerConfig {
        public_dir: public_dir.to_path_buf(),
        ..ServerConfig::default()
    };
    (state.clone(), build_router(state, &config))
}

fn send_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/send")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("Failed to build request")
}

/// Form fields up to and including the file part's headers
fn form_head(file_name: &str) -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"username\"\r\n\r\n\
         A\r\n\
         --{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"message\"\r\n\r\n\
         hello\r\n\
         --{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n"
    )
}

async fn api_message_count(router: Router) -> usize {
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/messages?user=A")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["messages"].as_array().unwrap().len()
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    // テスト項目: 添付ファイルを書き込めない場合は 500 を返し、メッセージは追加されない
    // given (前提条件): 存在しないディレクトリを保存先にする
    let dir = TempDir::new().unwrap();
    let uploads = UploadStorage::new(dir.path().join("missing"));
    let (state, router) = create_app(uploads, dir.path());
    let body = format!("{}file bytes\r\n--{BOUNDARY}--\r\n", form_head("photo.png"));

    // when (操作):
    let response = router.clone().oneshot(send_request(body)).await.unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "internal server error");
    assert_eq!(state.repository.count().await, 0);
    assert_eq!(api_message_count(router).await, 0);
}

#[tokio::test]
async fn test_truncated_upload_is_bad_request() {
    // テスト項目: 途中で切れたアップロードは 400 を返し、ログにもディスクにも何も残らない
    // given (前提条件): 終端の boundary がない multipart 本文
    let dir = TempDir::new().unwrap();
    let upload_dir = dir.path().join("uploads");
    std::fs::create_dir_all(&upload_dir).unwrap();
    let (state, router) = create_app(UploadStorage::new(&upload_dir), dir.path());
    let body = format!("{}partial bytes without an end", form_head("cut.png"));

    // when (操作):
    let response = router.clone().oneshot(send_request(body)).await.unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.repository.count().await, 0);
    assert_eq!(api_message_count(router).await, 0);
    let leftovers: Vec<_> = std::fs::read_dir(&upload_dir).unwrap().collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_complete_submission_is_accepted() {
    // テスト項目: 同じ組み立て方の完全な本文は受理され、1 件追加される
    let dir = TempDir::new().unwrap();
    let upload_dir = dir.path().join("uploads");
    std::fs::create_dir_all(&upload_dir).unwrap();
    let (state, router) = create_app(UploadStorage::new(&upload_dir), dir.path());
    let body = format!("{}file bytes\r\n--{BOUNDARY}--\r\n", form_head("ok.png"));

    let response = router.clone().oneshot(send_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.repository.count().await, 1);
    assert_eq!(std::fs::read(upload_dir.join("ok.png")).unwrap(), b"file bytes");
    assert_eq!(api_message_count(router).await, 1);
}
