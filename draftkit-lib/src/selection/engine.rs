//! Selection Engine
//!
//! Owns one selection set and enforces its limits: at every point the set
//! holds at most `required_count` items whose costs sum to at most
//! `budget_limit`. Additions that would break either bound are rejected
//! whole; removals always succeed.

use super::constraints::Constraints;
use crate::catalog::{Catalog, CatalogItem, ItemId};
use crate::{Amount, DraftkitError, Result};
use serde::{Deserialize, Serialize};

/// Why an addition was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The set already holds `required_count` items.
    SelectionFull,
    /// Adding the item would push `spent` past the budget limit.
    OverBudget,
    /// The id is not in the catalog.
    UnknownItem,
}

/// Result of a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// No-op: the set is unchanged.
    Rejected(RejectReason),
}

impl ToggleOutcome {
    /// True if the toggle changed the selection.
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// A finalized selection ready to hand to a submission collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub items: Vec<ItemId>,
    pub spent: Amount,
}

/// Per-item view for rendering a catalog.
#[derive(Clone, Copy, Debug)]
pub struct ItemView<'a> {
    pub item: &'a CatalogItem,
    pub selected: bool,
    /// False when the item should be rendered disabled.
    pub selectable: bool,
}

/// Budget-constrained selection set over a catalog.
#[derive(Clone, Debug)]
pub struct SelectionEngine {
    catalog: Catalog,
    constraints: Constraints,
    selected: Vec<ItemId>,
    spent: Amount,
}

impl SelectionEngine {
    /// Start an empty selection over `catalog`.
    pub fn new(catalog: Catalog, constraints: Constraints) -> Self {
        Self {
            catalog,
            constraints,
            selected: Vec::new(),
            spent: Amount::zero(),
        }
    }

    /// Select the item if it is not selected, deselect it otherwise.
    ///
    /// Deselection always succeeds. Selection succeeds only if the set has room
    /// and the item fits the remaining budget; otherwise nothing changes.
    pub fn toggle(&mut self, id: &ItemId) -> ToggleOutcome {
        let Some(item) = self.catalog.get(id) else {
            tracing::debug!(item = %id, "toggle ignored: unknown item");
            return ToggleOutcome::Rejected(RejectReason::UnknownItem);
        };
        let cost = item.cost;

        if let Some(position) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(position);
            self.spent = self
                .spent
                .checked_sub(&cost)
                .unwrap_or_else(|| self.recompute_spent());
            tracing::debug!(item = %id, spent = %self.spent, "deselected");
            return ToggleOutcome::Deselected;
        }

        if let Some(reason) = self.check_addition(&cost) {
            tracing::debug!(item = %id, ?reason, "selection rejected");
            return ToggleOutcome::Rejected(reason);
        }

        let Some(spent) = self.spent.checked_add(&cost) else {
            return ToggleOutcome::Rejected(RejectReason::OverBudget);
        };
        self.spent = spent;
        self.selected.push(id.clone());
        tracing::debug!(item = %id, spent = %self.spent, count = self.selected.len(), "selected");
        ToggleOutcome::Selected
    }

    /// Whether toggling `id` would succeed: true for selected items and for
    /// items that fit both limits.
    pub fn can_select(&self, id: &ItemId) -> bool {
        if self.is_selected(id) {
            return true;
        }
        match self.catalog.get(id) {
            Some(item) => self.check_addition(&item.cost).is_none(),
            None => false,
        }
    }

    /// True iff exactly `required_count` items are selected.
    pub fn can_submit(&self) -> bool {
        self.selected.len() == self.constraints.required_count
    }

    /// Finalize the selection.
    ///
    /// # Errors
    ///
    /// Returns [`DraftkitError::Validation`] naming the required count when the
    /// set does not hold exactly that many items.
    pub fn submit(&self) -> Result<Selection> {
        if !self.can_submit() {
            return Err(DraftkitError::Validation {
                required: self.constraints.required_count,
                selected: self.selected.len(),
            });
        }
        Ok(Selection {
            items: self.selected.clone(),
            spent: self.spent,
        })
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in the order they were picked.
    pub fn selected(&self) -> &[ItemId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn spent(&self) -> Amount {
        self.spent
    }

    pub fn remaining_budget(&self) -> Amount {
        self.constraints
            .budget_limit
            .checked_sub(&self.spent)
            .unwrap_or_else(Amount::zero)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Every catalog item with its selected/selectable flags.
    pub fn items(&self) -> impl Iterator<Item = ItemView<'_>> {
        self.catalog.iter().map(move |item| ItemView {
            item,
            selected: self.is_selected(&item.id),
            selectable: self.can_select(&item.id),
        })
    }

    fn check_addition(&self, cost: &Amount) -> Option<RejectReason> {
        if self.selected.len() >= self.constraints.required_count {
            return Some(RejectReason::SelectionFull);
        }
        if self.spent.would_exceed(cost, &self.constraints.budget_limit) {
            return Some(RejectReason::OverBudget);
        }
        None
    }

    fn recompute_spent(&self) -> Amount {
        self.selected
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .fold(Amount::zero(), |sum, item| {
                sum.checked_add(&item.cost).unwrap_or(sum)
            })
    }
}
