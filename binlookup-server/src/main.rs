//! BINLOOKUP HTTP Server binary

use binlookup_server::{server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    server::run(&config).await
}
