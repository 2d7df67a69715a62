mod api;
mod batch;
mod config;
mod error;
mod migrate;

#[cfg(test)]
mod tests;

use anyhow::Result;
use migrate::DnsMigration;

const DEFAULT_CONFIG: &str = "config.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = config::load_config(&config_file)?;

    DnsMigration::from_config(config)?.run().await?;
    Ok(())
}
