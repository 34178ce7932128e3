//! UseCase: フィード取得処理
//!
//! ポーリングのたびにメッセージログ全体のスナップショットを返します。
//! 差分取得は行いません。

use std::sync::Arc;

use crate::domain::{MessageLog, MessageRepository};

/// フィード取得のユースケース
pub struct FetchFeedUseCase {
    repository: Arc<dyn MessageRepository>,
}

impl FetchFeedUseCase {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// 呼び出し時点のログを到着順で返す
    pub async fn execute(&self, viewer: &str) -> MessageLog {
        let log = self.repository.snapshot().await;
        tracing::debug!("Fetched {} messages for viewer '{}'", log.len(), viewer);
        log
    }
}
