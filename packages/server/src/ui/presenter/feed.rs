//! Per-viewer view model of the whole message log.
//!
//! Rendering is always a full pass over the snapshot; there is no delta mode.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::{
    domain::{AttachmentKind, ChatMessage, StoredFileName},
    infrastructure::dto::http::{AttachmentDto, FeedDto, FeedEntryDto},
};

/// Route prefix under which stored uploads are served
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Everything except RFC 3986 unreserved characters is encoded
const UPLOAD_NAME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Whether the viewer wrote a message.
///
/// Serializes to the CSS class used by the chat page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Framing {
    #[serde(rename = "me")]
    Own,
    #[serde(rename = "other")]
    Other,
}

/// Typed embed for an attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentView {
    pub name: String,
    pub kind: AttachmentKind,
    /// Retrieval reference, e.g. `/uploads/cat.png`
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    pub framing: Framing,
    pub user: String,
    pub time: String,
    pub attachment: Option<AttachmentView>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feed {
    pub entries: Vec<FeedEntry>,
}

pub struct FeedRenderer;

impl FeedRenderer {
    /// Tag every message of `messages` as own or other for `viewer`.
    pub fn render(messages: &[ChatMessage], viewer: &str) -> Feed {
        let entries = messages
            .iter()
            .map(|message| Self::render_entry(message, viewer))
            .collect();
        Feed { entries }
    }

    fn render_entry(message: &ChatMessage, viewer: &str) -> FeedEntry {
        let framing = if message.is_authored_by(viewer) {
            Framing::Own
        } else {
            Framing::Other
        };

        FeedEntry {
            framing,
            user: message.user().as_str().to_string(),
            time: message.time().as_str().to_string(),
            attachment: message.attachment().map(|a| AttachmentView {
                name: a.stored_name.as_str().to_string(),
                kind: a.kind,
                url: upload_url(&a.stored_name),
            }),
            text: message.text().map(|t| t.as_str().to_string()),
        }
    }
}

/// URL of a stored upload, percent-encoding everything but unreserved characters
pub fn upload_url(name: &StoredFileName) -> String {
    format!(
        "{UPLOADS_ROUTE}/{}",
        utf8_percent_encode(name.as_str(), UPLOAD_NAME)
    )
}

impl From<&Feed> for FeedDto {
    fn from(feed: &Feed) -> Self {
        let messages = feed
            .entries
            .iter()
            .map(|entry| FeedEntryDto {
                own: entry.framing == Framing::Own,
                user: entry.user.clone(),
                time: entry.time.clone(),
                text: entry.text.clone(),
                attachment: entry.attachment.as_ref().map(|a| AttachmentDto {
                    name: a.name.clone(),
                    kind: a.kind,
                    url: a.url.clone(),
                }),
            })
            .collect();
        Self { messages }
    }
}
