//! Server configuration from command-line flags and environment variables.

use std::path::PathBuf;

use clap::Parser;

/// Poll-based chat server with file attachments
#[derive(Debug, Clone, Parser)]
#[command(name = "engawa-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "ENGAWA_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ENGAWA_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory that receives uploaded files
    #[arg(long, env = "ENGAWA_UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Directory served for requests no route matches
    #[arg(long, env = "ENGAWA_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Largest accepted request body, in MiB
    #[arg(long, env = "ENGAWA_MAX_UPLOAD_MB", default_value_t = 1024)]
    pub max_upload_mb: usize,

    /// Default tracing filter when RUST_LOG is unset
    #[arg(long, env = "ENGAWA_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port`, with IPv6 hosts bracketed
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            upload_dir: PathBuf::from("uploads"),
            public_dir: PathBuf::from("public"),
            max_upload_mb: 1024,
            log_level: "info".to_string(),
        }
    }
}
