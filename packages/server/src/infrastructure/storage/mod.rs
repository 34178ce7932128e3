//! Durable storage for uploaded attachments.

pub mod upload;

pub use upload::{CHUNK_SIZE, StoredUpload, UploadError, UploadStorage};
