//! HTTP API request/response DTOs for the chat application.

use serde::{Deserialize, Serialize};

use crate::domain::AttachmentKind;

/// Query parameters for feed polling (`?user=<viewer>`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    /// Viewer identity; missing means the empty name
    #[serde(default)]
    pub user: String,
}

/// Whole feed as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedDto {
    pub messages: Vec<FeedEntryDto>,
}

/// One message as seen by a particular viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntryDto {
    /// true when the viewer wrote this message
    pub own: bool,
    pub user: String,
    pub time: String, // HH:MM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentDto>,
}

/// Attachment reference with its retrieval URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentDto {
    pub name: String,
    pub kind: AttachmentKind,
    pub url: String,
}
