//! Collaborators with scripted behavior.

use crate::catalog::RawCatalogRecord;
use crate::source::CatalogSource;
use crate::submission::{Submission, SubmissionSink};
use crate::{DraftkitError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Catalog source that always fails.
#[derive(Clone, Debug)]
pub struct FailingCatalogSource {
    reason: String,
}

impl FailingCatalogSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for FailingCatalogSource {
    async fn fetch_records(&self) -> Result<Vec<RawCatalogRecord>> {
        Err(DraftkitError::CatalogFetch(self.reason.clone()))
    }
}

/// Catalog source that counts fetches.
#[derive(Clone, Debug, Default)]
pub struct CountingCatalogSource {
    records: Vec<RawCatalogRecord>,
    fetches: Arc<AtomicUsize>,
}

impl CountingCatalogSource {
    pub fn new(records: Vec<RawCatalogRecord>) -> Self {
        Self {
            records,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for CountingCatalogSource {
    async fn fetch_records(&self) -> Result<Vec<RawCatalogRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// Submission sink that always fails.
#[derive(Clone, Debug)]
pub struct FailingSubmissionSink {
    reason: String,
}

impl FailingSubmissionSink {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SubmissionSink for FailingSubmissionSink {
    async fn submit(&self, _submission: &Submission) -> Result<()> {
        Err(DraftkitError::Io(self.reason.clone()))
    }
}
