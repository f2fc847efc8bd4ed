//! Selection sessions
//!
//! A [`SelectionSession`] is the explicit owner of one participant's selection
//! for one contest: it loads the catalog once, routes toggles to its
//! [`SelectionEngine`], and hands the final selection to a submission sink.
//! Sessions share no state, so any number can run side by side.
//!
//! # Example
//!
//! ```
//! use draftkit_lib::selection::Constraints;
//! use draftkit_lib::session::SelectionSession;
//! use draftkit_lib::source::StaticCatalogSource;
//! use draftkit_lib::submission::MemorySubmissionSink;
//! use draftkit_lib::Amount;
//!
//! # tokio_test_block_on(async {
//! let source = StaticCatalogSource::new(vec![
//!     serde_json::json!({ "id": 1, "name": "Doodle #9012", "price": 2200 }),
//! ]);
//! let constraints = Constraints::new(1, Amount::from_units(10_000)).unwrap();
//! let mut session = SelectionSession::start(1, &source, constraints).await;
//!
//! session.toggle(&"1".into());
//! let sink = MemorySubmissionSink::new();
//! let entry = session.submit(&sink).await.unwrap();
//! assert_eq!(entry.items.len(), 1);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use crate::catalog::{ItemId, MetricWeights};
use crate::selection::{Constraints, SelectionEngine, ToggleOutcome};
use crate::source::{load_catalog_or_fallback, CatalogOrigin, CatalogSource};
use crate::submission::{Submission, SubmissionSink};
use crate::{DraftkitError, Result};

/// One participant's draft for one contest.
#[derive(Debug)]
pub struct SelectionSession {
    contest_id: u64,
    engine: SelectionEngine,
    origin: CatalogOrigin,
}

impl SelectionSession {
    /// Load the catalog (falling back on failure) and start an empty selection.
    pub async fn start<S>(contest_id: u64, source: &S, constraints: Constraints) -> Self
    where
        S: CatalogSource + ?Sized,
    {
        Self::start_with_weights(contest_id, source, constraints, &MetricWeights::default()).await
    }

    /// Like [`start`](Self::start), scoring metrics catalogs with `weights`.
    pub async fn start_with_weights<S>(
        contest_id: u64,
        source: &S,
        constraints: Constraints,
        weights: &MetricWeights,
    ) -> Self
    where
        S: CatalogSource + ?Sized,
    {
        let loaded = load_catalog_or_fallback(source, weights).await;
        tracing::info!(
            contest_id,
            items = loaded.catalog.len(),
            origin = ?loaded.origin,
            required = constraints.required_count,
            budget = %constraints.budget_limit,
            "selection session started"
        );

        Self {
            contest_id,
            engine: SelectionEngine::new(loaded.catalog, constraints),
            origin: loaded.origin,
        }
    }

    pub fn contest_id(&self) -> u64 {
        self.contest_id
    }

    /// Whether the catalog came from the source or the fallback.
    pub fn catalog_origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn toggle(&mut self, id: &ItemId) -> ToggleOutcome {
        self.engine.toggle(id)
    }

    pub fn can_select(&self, id: &ItemId) -> bool {
        self.engine.can_select(id)
    }

    pub fn can_submit(&self) -> bool {
        self.engine.can_submit()
    }

    /// Validate the selection and hand it to `sink`.
    ///
    /// # Errors
    ///
    /// - [`DraftkitError::Validation`] if the selection is incomplete; the sink
    ///   is not called.
    /// - [`DraftkitError::Submission`] if the sink fails. No retry is attempted.
    pub async fn submit<K>(&self, sink: &K) -> Result<Submission>
    where
        K: SubmissionSink + ?Sized,
    {
        let selection = self.engine.submit()?;
        let submission = Submission::new(self.contest_id, selection);

        sink.submit(&submission).await.map_err(|err| match err {
            DraftkitError::Submission(_) => err,
            other => DraftkitError::Submission(other.to_string()),
        })?;

        tracing::info!(
            contest_id = self.contest_id,
            items = submission.items.len(),
            spent = %submission.spent,
            "selection submitted"
        );
        Ok(submission)
    }
}
