//! NFT Catalog
//!
//! The catalog is the read-only list of items a participant can draft during
//! one session. It is built once, either from typed items or by mapping the
//! loosely-typed records of a catalog source (see [`record`]), and never
//! changes afterwards.
//!
//! # Example
//!
//! ```
//! use draftkit_lib::catalog::{Catalog, CatalogItem};
//! use draftkit_lib::Amount;
//!
//! let catalog = Catalog::new(vec![
//!     CatalogItem::new("1", "Bored Ape #1234", Amount::from_units(4500)).with_collection("BAYC"),
//!     CatalogItem::new("2", "Crypto Punk #5678", Amount::from_units(3800)),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get(&"1".into()).unwrap().collection.as_deref(), Some("BAYC"));
//! ```

mod fallback;
pub mod record;
pub mod scoring;

pub use fallback::default_catalog;
pub use record::{map_records, ItemMetrics, Pricing, RawCatalogRecord};
pub use scoring::{score_items, MetricWeights, MAX_WEIGHT};

use crate::{Amount, DraftkitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique identifier of a catalog item.
///
/// Sources may use numeric or string ids; both are normalized to a string.
///
/// ```
/// use draftkit_lib::ItemId;
///
/// let a: ItemId = "7".into();
/// let b = ItemId::from(7u64);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create a new ItemId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A draftable item with its cost (price or point score).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub cost: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

impl CatalogItem {
    /// Create an item without a collection tag.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, cost: Amount) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            collection: None,
        }
    }

    /// Set the collection tag.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }
}

/// Immutable, id-indexed list of catalog items.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative costs.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.cost.is_negative() {
                return Err(DraftkitError::invalid_data(
                    "cost",
                    format!("item {} has negative cost {}", item.id, item.cost),
                ));
            }
            if index.insert(item.id.clone(), position).is_some() {
                return Err(DraftkitError::invalid_data(
                    "id",
                    format!("duplicate item id {}", item.id),
                ));
            }
        }
        Ok(Self { items, index })
    }

    /// A catalog with no items (the state before loading completes).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
