use anyhow::{Context, Result};
use yalla::config::Config;
use yalla::stores::StoreCatalog;
use yalla::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    logger::init(config.logging.enabled)?;

    let catalog = match &config.stores.catalog_path {
        Some(path) => StoreCatalog::from_file(path)
            .with_context(|| format!("Failed to load store catalog: {}", path.display()))?,
        None => StoreCatalog::seed(),
    };

    log::info!("starting with {} stores in catalog", catalog.len());

    ui::run_app(config, catalog).await?;

    Ok(())
}
