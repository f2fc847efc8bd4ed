//! Per-contest selection limits.

use crate::{Amount, DraftkitError, Result};
use serde::{Deserialize, Serialize};

/// Default budget per participant for priced contests ($10,000).
pub const DEFAULT_BUDGET_LIMIT: i64 = 10_000;

/// Limits a selection session must respect.
///
/// Fixed for the lifetime of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    /// Exact number of items a valid submission must contain.
    pub required_count: usize,
    /// Maximum cumulative cost of the selected items.
    pub budget_limit: Amount,
}

impl Constraints {
    /// Create constraints, rejecting a negative budget.
    pub fn new(required_count: usize, budget_limit: Amount) -> Result<Self> {
        if budget_limit.is_negative() {
            return Err(DraftkitError::invalid_data(
                "budget_limit",
                format!("must not be negative (got {})", budget_limit),
            ));
        }
        Ok(Self {
            required_count,
            budget_limit,
        })
    }

    /// Constraints with the default budget limit.
    pub fn with_default_budget(required_count: usize) -> Self {
        Self {
            required_count,
            budget_limit: Amount::from_units(DEFAULT_BUDGET_LIMIT),
        }
    }
}
