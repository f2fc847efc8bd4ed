//! Constrained NFT Selection
//!
//! A participant drafts exactly `required_count` items whose summed cost stays
//! within `budget_limit`. The [`SelectionEngine`] enforces both limits on every
//! toggle and reports when the set is ready to submit.
//!
//! # Example
//!
//! ```
//! use draftkit_lib::catalog::default_catalog;
//! use draftkit_lib::selection::{Constraints, SelectionEngine, ToggleOutcome};
//! use draftkit_lib::Amount;
//!
//! let constraints = Constraints::new(2, Amount::from_units(10_000)).unwrap();
//! let mut engine = SelectionEngine::new(default_catalog(), constraints);
//!
//! assert_eq!(engine.toggle(&"1".into()), ToggleOutcome::Selected);
//! assert!(!engine.can_submit());
//! assert_eq!(engine.toggle(&"2".into()), ToggleOutcome::Selected);
//! assert!(engine.can_submit());
//!
//! let selection = engine.submit().unwrap();
//! assert_eq!(selection.spent, Amount::from_units(8300));
//! ```

mod constraints;
mod engine;

pub use constraints::{Constraints, DEFAULT_BUDGET_LIMIT};
pub use engine::{ItemView, RejectReason, Selection, SelectionEngine, ToggleOutcome};
