//! Server startup and runtime errors.

use std::net::SocketAddr;

use thiserror::Error;

use crate::infrastructure::storage::UploadError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Storage(#[from] UploadError),

    #[error("failed to compile feed template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
