//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{api_messages, get_messages, health_check, index, send_message};
