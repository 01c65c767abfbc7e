use std::path::PathBuf;

use anyhow::Result;
use pettravel::{PetTravelConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional first argument: path to a TOML config file
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = PetTravelConfig::load_from_path(config_path)?;

    logging::init(&config.logging)?;
    tracing::debug!(?config, "Configuration loaded");

    web::run(&config.server).await
}
