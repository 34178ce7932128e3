//! Core domain models for the chat application.

use serde::Serialize;

use super::{
    error::MessageError,
    value_object::{AttachmentKind, ClockTime, DisplayName, MessageText, StoredFileName},
};

/// Reference to a fully written upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Basename inside the upload directory
    pub stored_name: StoredFileName,
    /// Media kind derived from the extension
    pub kind: AttachmentKind,
}

impl Attachment {
    /// Create an attachment, classifying the kind from the stored name
    pub fn new(stored_name: StoredFileName) -> Self {
        let kind = AttachmentKind::classify(&stored_name);
        Self { stored_name, kind }
    }
}

/// Represents a chat message in the domain model
///
/// Immutable once created; always carries text, an attachment, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    time: ClockTime,
    user: DisplayName,
    text: Option<MessageText>,
    attachment: Option<Attachment>,
}

impl ChatMessage {
    /// Create a new chat message
    ///
    /// # Errors
    ///
    /// Returns `MessageError::Empty` when both `text` and `attachment` are `None`
    pub fn new(
        time: ClockTime,
        user: DisplayName,
        text: Option<MessageText>,
        attachment: Option<Attachment>,
    ) -> Result<Self, MessageError> {
        if text.is_none() && attachment.is_none() {
            return Err(MessageError::Empty);
        }
        Ok(Self {
            time,
            user,
            text,
            attachment,
        })
    }

    pub fn time(&self) -> &ClockTime {
        &self.time
    }

    pub fn user(&self) -> &DisplayName {
        &self.user
    }

    pub fn text(&self) -> Option<&MessageText> {
        self.text.as_ref()
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Whether `viewer` wrote this message (exact string comparison)
    pub fn is_authored_by(&self, viewer: &str) -> bool {
        self.user.as_str() == viewer
    }
}
