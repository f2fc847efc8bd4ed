//! Test utilities for draft sessions.
//!
//! Collaborators that fail on demand and ready-made catalogs, so tests can
//! drive the fallback and submission-failure paths without real I/O.
//!
//! ```rust,ignore
//! use draftkit_lib::test_utils::{FailingCatalogSource, TestFixtures};
//!
//! let session = SelectionSession::start(1, &FailingCatalogSource::new("offline"), constraints).await;
//! assert_eq!(session.catalog_origin(), CatalogOrigin::Fallback);
//! ```

mod fixtures;
mod mocks;

pub use fixtures::TestFixtures;
pub use mocks::{CountingCatalogSource, FailingCatalogSource, FailingSubmissionSink};
