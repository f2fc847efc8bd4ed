//! Draftkit library.
//!
//! Client-side logic for NFT fantasy contests: participants draft a fixed
//! number of NFTs under a budget (or points) cap and submit the entry.
//! Contest state and payouts belong to an external contract; this crate owns
//! only the selection rules and delegates I/O to callers through trait-based
//! collaborators ([`CatalogSource`], [`SubmissionSink`]).
//!
//! # Features
//!
//! - **Selection Engine**: enforces the item-count and budget limits on every toggle
//! - **Catalog Mapping**: turns loosely-typed API records into strict items, with
//!   a built-in fallback catalog when the source fails
//! - **Points Scoring**: derives integer point costs from sales, transfer and volume metrics
//! - **Exact Amounts**: every price, score and budget is a fixed-point decimal
//!
//! # Example
//!
//! ```
//! use draftkit_lib::catalog::default_catalog;
//! use draftkit_lib::selection::{Constraints, RejectReason, SelectionEngine, ToggleOutcome};
//! use draftkit_lib::Amount;
//!
//! let constraints = Constraints::new(3, Amount::from_units(10_000)).unwrap();
//! let mut engine = SelectionEngine::new(default_catalog(), constraints);
//!
//! engine.toggle(&"1".into()); // 4500
//! engine.toggle(&"2".into()); // 3800
//! assert_eq!(
//!     engine.toggle(&"3".into()), // 2200 would make 10500
//!     ToggleOutcome::Rejected(RejectReason::OverBudget)
//! );
//! ```

pub mod amount;
pub mod catalog;
pub mod config;
pub mod contest;
pub mod errors;
pub mod selection;
pub mod session;
pub mod source;
pub mod submission;

/// Test utilities for draft sessions.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use amount::Amount;
pub use catalog::{Catalog, CatalogItem, ItemId};
pub use config::DraftConfig;
pub use contest::{Contest, ContestFilter, ContestStatus};
pub use errors::{DraftkitError, DraftkitErrorCode};
pub use selection::{Constraints, Selection, SelectionEngine, ToggleOutcome};
pub use session::SelectionSession;
pub use source::{CatalogOrigin, CatalogSource, JsonFileCatalogSource, StaticCatalogSource};
pub use submission::{FileSubmissionSink, MemorySubmissionSink, Submission, SubmissionSink};

/// Common result alias for draft operations.
pub type Result<T> = std::result::Result<T, DraftkitError>;
