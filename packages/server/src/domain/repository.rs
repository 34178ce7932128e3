//! Repository trait for the message log.
//!
//! The domain layer owns this abstraction; infrastructure implements it.
//! Nothing outside an implementation touches the underlying sequence.

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use super::entity::ChatMessage;

/// Frozen view of the message log, in arrival order.
///
/// Later appends never show up in an existing snapshot.
#[derive(Debug, Clone, Default)]
pub struct MessageLog(Arc<Vec<ChatMessage>>);

impl MessageLog {
    pub fn new(messages: Arc<Vec<ChatMessage>>) -> Self {
        Self(messages)
    }
}

impl Deref for MessageLog {
    type Target = [ChatMessage];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

/// Append-only message store.
///
/// `append` and `snapshot` are atomic with respect to each other and to
/// concurrent calls of themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Add a message to the tail of the log
    async fn append(&self, message: ChatMessage);

    /// Immutable view of the whole log as of this call
    async fn snapshot(&self) -> MessageLog;

    /// Number of messages in the log
    async fn count(&self) -> usize;
}
