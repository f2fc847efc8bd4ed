//! CLI command implementations

pub mod catalog;
pub mod contests;
pub mod draft;
pub mod init;
pub mod submissions;

use anyhow::{Context, Result};
use draftkit_lib::catalog::default_catalog;
use draftkit_lib::{
    Amount, CatalogSource, Contest, DraftConfig, FileSubmissionSink, JsonFileCatalogSource,
    StaticCatalogSource,
};
use std::path::{Path, PathBuf};

/// Get the path to the config file
pub fn config_path(storage_dir: &Path) -> PathBuf {
    storage_dir.join("config.json")
}

/// Load the config, or defaults if none was written yet
pub fn load_config(storage_dir: &Path) -> Result<DraftConfig> {
    let path = config_path(storage_dir);
    tracing::debug!(path = %path.display(), "loading config");
    DraftConfig::load(&path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Parse a budget argument
pub fn parse_budget(value: &str) -> Result<Amount> {
    let amount = Amount::from_str_checked(value)
        .with_context(|| format!("Invalid budget '{}'", value))?;
    if amount.is_negative() {
        anyhow::bail!("Budget must not be negative");
    }
    Ok(amount)
}

/// Catalog source for a session: the given or configured file, else the built-in catalog
pub fn catalog_source(
    storage_dir: &Path,
    config: &DraftConfig,
    file: Option<PathBuf>,
) -> Box<dyn CatalogSource> {
    match file.or_else(|| config.catalog_path.clone()) {
        Some(path) => Box::new(JsonFileCatalogSource::new(DraftConfig::resolve(
            storage_dir,
            &path,
        ))),
        None => Box::new(StaticCatalogSource::from_catalog(&default_catalog())),
    }
}

/// Load the contest list from the given or configured file
///
/// Returns an empty list when no contest file is configured.
pub fn load_contests(
    storage_dir: &Path,
    config: &DraftConfig,
    file: Option<PathBuf>,
) -> Result<Vec<Contest>> {
    let Some(path) = file.or_else(|| config.contests_path.clone()) else {
        return Ok(Vec::new());
    };
    let path = DraftConfig::resolve(storage_dir, &path);
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read contests from {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid contest list in {}", path.display()))
}

/// Submission sink under the storage directory
pub fn submission_sink(storage_dir: &Path, config: &DraftConfig) -> FileSubmissionSink {
    FileSubmissionSink::new(DraftConfig::resolve(storage_dir, &config.submissions_dir))
}

/// Current unix time in seconds
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
