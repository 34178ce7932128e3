//! Domain layer for the chat application.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Attachment, ChatMessage};
pub use error::{MessageError, ValueObjectError};
pub use repository::{MessageLog, MessageRepository};
pub use value_object::{AttachmentKind, ClockTime, DisplayName, MessageText, StoredFileName};
