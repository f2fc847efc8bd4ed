//! Catalog command - show the NFTs available for drafting

use anyhow::Result;
use draftkit_lib::source::load_catalog_or_fallback;
use draftkit_lib::CatalogOrigin;
use std::path::{Path, PathBuf};

use crate::ui;

pub async fn run(storage_dir: &Path, file: Option<PathBuf>, verbose: bool) -> Result<()> {
    ui::header("NFT Catalog");

    let config = super::load_config(storage_dir)?;
    let source = super::catalog_source(storage_dir, &config, file);

    let spinner = ui::spinner("Loading catalog...");
    let loaded = load_catalog_or_fallback(source.as_ref(), &config.weights).await;
    spinner.finish_and_clear();

    if verbose && loaded.origin == CatalogOrigin::Fallback {
        ui::warning("Catalog source unavailable, showing the built-in catalog");
    }

    for item in loaded.catalog.iter() {
        println!("  {}", ui::item_label(item));
    }

    ui::separator();
    ui::key_value("Items", &loaded.catalog.len().to_string());

    Ok(())
}
