//! InMemory Message Repository 実装
//!
//! ドメイン層が定義する MessageRepository trait の具体的な実装。
//! `Vec` をインメモリ DB として使用します。
//!
//! ログは `Arc<Vec<_>>` として 1 つの Mutex の内側に置かれます。
//! `snapshot` は `Arc` を複製するだけなのでクリティカルセクションは O(1)、
//! `append` は `Arc::make_mut` による copy-on-write なので、
//! 既に返したスナップショットが後から変化することはありません。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, MessageLog, MessageRepository};

/// インメモリ Message Repository 実装
#[derive(Default)]
pub struct InMemoryMessageRepository {
    /// メッセージログ（到着順）
    log: Mutex<Arc<Vec<ChatMessage>>>,
}

impl InMemoryMessageRepository {
    /// 空のログで InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: ChatMessage) {
        let mut log = self.log.lock().await;
        Arc::make_mut(&mut log).push(message);
    }

    async fn snapshot(&self) -> MessageLog {
        let log = self.log.lock().await;
        MessageLog::new(Arc::clone(&log))
    }

    async fn count(&self) -> usize {
        self.log.lock().await.len()
    }
}
