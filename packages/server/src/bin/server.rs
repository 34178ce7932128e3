//! Poll-based chat server with file attachments.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin engawa-server -- --port 8080 --upload-dir uploads
//! ```

use clap::Parser;
use engawa_server::ServerConfig;
use engawa_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = engawa_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
