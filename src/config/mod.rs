pub mod models;

pub use models::Config;

use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

pub fn load_config(config_file: impl AsRef<Path>) -> Result<Config> {
    let path = config_file.as_ref();
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("Failed to load config file: {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(contents).context("Failed to parse config")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    Ok(config)
}
