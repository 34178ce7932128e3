//! Poll-based chat server library.
//!
//! Clients post text and file attachments over HTTP and poll the shared
//! message log, which is rendered per viewer on every request.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
