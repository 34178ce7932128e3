//! UseCase 層のエラー定義

use thiserror::Error;

use crate::infrastructure::storage::UploadError;

/// メッセージ送信時のエラー
#[derive(Debug, Error)]
pub enum SendMessageError {
    /// 添付ファイルの保存に失敗
    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl SendMessageError {
    /// クライアント起因のエラーかどうか
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Upload(e) => e.is_client_error(),
        }
    }
}
