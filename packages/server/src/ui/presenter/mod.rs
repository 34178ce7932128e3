//! Feed rendering: snapshot + viewer identity → payload.

pub mod feed;
pub mod html;

pub use feed::{AttachmentView, Feed, FeedEntry, FeedRenderer, Framing, UPLOADS_ROUTE};
pub use html::FeedTemplate;
