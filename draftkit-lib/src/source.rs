//! Catalog sources
//!
//! A [`CatalogSource`] delivers the raw records for one selection session.
//! Loading happens once, at session start. A failed or unusable fetch is
//! never surfaced to the participant: [`load_catalog_or_fallback`] logs it and
//! substitutes [`default_catalog`].

use crate::catalog::{
    default_catalog, map_records, Catalog, CatalogItem, MetricWeights, RawCatalogRecord,
};
use crate::{DraftkitError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Read-only supplier of catalog records.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every record of the catalog.
    async fn fetch_records(&self) -> Result<Vec<RawCatalogRecord>>;
}

/// In-memory records, e.g. a catalog embedded in a contest config.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalogSource {
    records: Vec<RawCatalogRecord>,
}

impl StaticCatalogSource {
    pub fn new(records: Vec<RawCatalogRecord>) -> Self {
        Self { records }
    }

    /// Serve an already-typed catalog as priced records.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            records: catalog.iter().map(CatalogItem::to_record).collect(),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_records(&self) -> Result<Vec<RawCatalogRecord>> {
        Ok(self.records.clone())
    }
}

/// Records read from a JSON file holding an array of objects.
#[derive(Clone, Debug)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalogSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_records(&self) -> Result<Vec<RawCatalogRecord>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(DraftkitError::catalog_fetch)?;
        serde_json::from_str(&json).map_err(DraftkitError::catalog_fetch)
    }
}

/// Where a session's catalog came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// The catalog source delivered usable records.
    Source,
    /// The source failed; the built-in catalog was substituted.
    Fallback,
}

/// A catalog together with its origin.
#[derive(Clone, Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub origin: CatalogOrigin,
}

/// Fetch and map a catalog, failing with [`DraftkitError::CatalogFetch`].
pub async fn load_catalog<S>(source: &S, weights: &MetricWeights) -> Result<Catalog>
where
    S: CatalogSource + ?Sized,
{
    let records = source.fetch_records().await?;
    map_records(&records, weights)
}

/// Fetch and map a catalog, substituting the default catalog on any failure.
pub async fn load_catalog_or_fallback<S>(source: &S, weights: &MetricWeights) -> LoadedCatalog
where
    S: CatalogSource + ?Sized,
{
    match load_catalog(source, weights).await {
        Ok(catalog) => {
            tracing::info!(items = catalog.len(), "catalog loaded");
            LoadedCatalog {
                catalog,
                origin: CatalogOrigin::Source,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "catalog source failed, using fallback catalog");
            LoadedCatalog {
                catalog: default_catalog(),
                origin: CatalogOrigin::Fallback,
            }
        }
    }
}
