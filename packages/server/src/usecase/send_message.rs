//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::store_attachment() / execute() メソッド
//! - 添付ファイルの保存と、メッセージログへの追加
//!
//! ### なぜこのテストが必要か
//! - 本文も添付もない送信はログに追加されてはならない
//! - 添付ファイルは書き込み完了後にのみメッセージから参照される
//! - 不正なファイル名は basename に縮約されるか、添付なしとして扱われる
//!
//! ### どのような状況を想定しているか
//! - 正常系：本文のみ、添付のみ、本文と添付
//! - エッジケース：空の本文、空の送信、ディレクトリのみのファイル名
//! - 異常系：途中で切断されたアップロード

use std::{fmt::Display, sync::Arc};

use bytes::Bytes;
use futures_util::Stream;

use crate::{
    domain::{
        Attachment, ChatMessage, ClockTime, DisplayName, MessageRepository, MessageText,
        StoredFileName,
    },
    infrastructure::storage::{StoredUpload, UploadStorage},
};

use super::error::SendMessageError;

/// 送信フォームの内容
#[derive(Debug, Clone, Default)]
pub struct SendMessageCommand {
    /// 送信者の表示名（未指定なら空文字列）
    pub username: Option<String>,
    /// 本文（空文字列は未指定と同じ扱い）
    pub text: Option<String>,
    /// 保存済みの添付ファイル
    pub attachment: Option<Attachment>,
}

/// 送信結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// ログに追加された
    Appended,
    /// 本文も添付もないため何もしなかった
    Ignored,
}

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MessageRepository>,
    /// 添付ファイルの保存先
    uploads: Arc<UploadStorage>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn MessageRepository>, uploads: Arc<UploadStorage>) -> Self {
        Self {
            repository,
            uploads,
        }
    }

    /// 添付ファイルを保存する
    ///
    /// # Arguments
    ///
    /// * `client_filename` - クライアントが送ってきたファイル名（パスを含みうる）
    /// * `source` - ファイル内容のストリーム
    ///
    /// # Returns
    ///
    /// * `Ok(Some(StoredUpload))` - 保存完了
    /// * `Ok(None)` - 使えるファイル名がないため添付なし
    /// * `Err(SendMessageError)` - 保存失敗（送信全体を中止する）
    pub async fn store_attachment<S, E>(
        &self,
        client_filename: &str,
        source: S,
    ) -> Result<Option<StoredUpload>, SendMessageError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Display,
    {
        let name = match StoredFileName::from_client_filename(client_filename) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("No usable file name in '{}': {}", client_filename, e);
                return Ok(None);
            }
        };

        let stored = self.uploads.ingest(name, source).await?;
        Ok(Some(stored))
    }

    /// メッセージ送信を実行
    ///
    /// 本文か添付のどちらかがあればメッセージを作成してログに追加します。
    pub async fn execute(&self, command: SendMessageCommand) -> SendOutcome {
        let user = DisplayName::new(command.username.unwrap_or_default());
        let text = command.text.and_then(|t| MessageText::new(t).ok());

        let message = match ChatMessage::new(ClockTime::now(), user, text, command.attachment) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!("Submission ignored: {}", e);
                return SendOutcome::Ignored;
            }
        };

        tracing::info!(
            "Message from '{}' appended (attachment: {})",
            message.user(),
            message
                .attachment()
                .map(|a| a.stored_name.as_str())
                .unwrap_or("none")
        );
        self.repository.append(message).await;

        SendOutcome::Appended
    }
}
