//! Init command - write a config file

use anyhow::{Context, Result};
use draftkit_lib::DraftConfig;
use std::path::{Path, PathBuf};

use crate::ui;

pub async fn run(
    storage_dir: &Path,
    budget: Option<&str>,
    catalog: Option<PathBuf>,
    contests: Option<PathBuf>,
    force: bool,
    verbose: bool,
) -> Result<()> {
    ui::header("Initialize Draftkit");

    let path = super::config_path(storage_dir);
    if path.exists()
        && !force
        && !ui::confirm(
            &format!("{} already exists. Overwrite?", path.display()),
            false,
        )?
    {
        ui::info("Init cancelled");
        return Ok(());
    }

    let mut config = DraftConfig::default();
    if let Some(budget) = budget {
        config = config.with_budget_limit(super::parse_budget(budget)?);
    }
    if let Some(catalog) = catalog {
        config = config.with_catalog_path(catalog);
    }
    if let Some(contests) = contests {
        config = config.with_contests_path(contests);
    }
    config.validate()?;

    config
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ui::success(&format!("Wrote {}", path.display()));
    ui::key_value("Budget limit", &config.budget_limit.to_string());
    if verbose {
        ui::key_value("Submissions", &config.submissions_dir.display().to_string());
        ui::key_value(
            "Weights",
            &format!(
                "sales {} / transfers {} / volume {} x{}",
                config.weights.sales,
                config.weights.transfers,
                config.weights.volume,
                config.weights.scale
            ),
        );
    }

    Ok(())
}
