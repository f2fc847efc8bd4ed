//! Configuration for draft sessions.

use crate::catalog::MetricWeights;
use crate::selection::DEFAULT_BUDGET_LIMIT;
use crate::{Amount, DraftkitError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Draft settings, usually loaded from `config.json` in the storage directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Budget per participant for priced contests.
    #[serde(default = "default_budget_limit")]
    pub budget_limit: Amount,

    /// JSON catalog file; the built-in catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// JSON file holding the contest list.
    #[serde(default)]
    pub contests_path: Option<PathBuf>,

    /// Directory for submitted entries, relative to the storage directory.
    #[serde(default = "default_submissions_dir")]
    pub submissions_dir: PathBuf,

    /// Weights for metrics-based catalogs.
    #[serde(default)]
    pub weights: MetricWeights,
}

fn default_budget_limit() -> Amount {
    Amount::from_units(DEFAULT_BUDGET_LIMIT)
}

fn default_submissions_dir() -> PathBuf {
    PathBuf::from("submissions")
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            budget_limit: default_budget_limit(),
            catalog_path: None,
            contests_path: None,
            submissions_dir: default_submissions_dir(),
            weights: MetricWeights::default(),
        }
    }
}

impl DraftConfig {
    /// Set the budget limit.
    pub fn with_budget_limit(mut self, budget_limit: Amount) -> Self {
        self.budget_limit = budget_limit;
        self
    }

    /// Set the catalog file.
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Set the contest list file.
    pub fn with_contests_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.contests_path = Some(path.into());
        self
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.budget_limit.is_negative() {
            return Err(DraftkitError::invalid_data(
                "budget_limit",
                "must not be negative",
            ));
        }
        self.weights.validate()
    }

    /// Load from a JSON file, returning defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Write as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolve a possibly relative path against the storage directory.
    pub fn resolve(storage_dir: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            storage_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: DraftConfig = serde_json::from_str(r#"{"budget_limit": "2500"}"#).unwrap();
        assert_eq!(config.budget_limit, Amount::from_units(2500));
        assert_eq!(config.submissions_dir, PathBuf::from("submissions"));
        assert_eq!(config.weights, MetricWeights::default());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = DraftConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, DraftConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = DraftConfig::default()
            .with_budget_limit(Amount::from_units(500))
            .with_catalog_path("catalog.json");

        config.save(&path).unwrap();
        assert_eq!(DraftConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_negative_budget_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"budget_limit": "-1"}"#).unwrap();
        assert!(DraftConfig::load(&path).is_err());
    }

    #[test]
    fn test_oversized_weights_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"weights": {"sales": "0.3", "transfers": "0.3", "volume": "0.4",
                "scale": "79228162514264337593543950335"}}"#,
        )
        .unwrap();

        let err = DraftConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("weights.scale"));
    }

    #[test]
    fn test_resolve_relative_paths() {
        let base = Path::new("/var/draftkit");
        assert_eq!(
            DraftConfig::resolve(base, Path::new("catalog.json")),
            PathBuf::from("/var/draftkit/catalog.json")
        );
        assert_eq!(
            DraftConfig::resolve(base, Path::new("/tmp/c.json")),
            PathBuf::from("/tmp/c.json")
        );
    }
}
