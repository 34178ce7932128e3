//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod fetch_feed;
pub mod send_message;

pub use error::SendMessageError;
pub use fetch_feed::FetchFeedUseCase;
pub use send_message::{SendMessageCommand, SendMessageUseCase, SendOutcome};
