//! Test fixtures and data generators.

use crate::catalog::{Catalog, CatalogItem, RawCatalogRecord};
use crate::contest::Contest;
use crate::selection::Constraints;
use crate::Amount;
use serde_json::json;

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// Catalog with arbitrary prices, ids "0".."n".
    pub fn catalog_with_prices(prices: &[i64]) -> Catalog {
        let items = prices
            .iter()
            .enumerate()
            .map(|(i, price)| {
                CatalogItem::new(i.to_string(), format!("Item {}", i), Amount::from_units(*price))
            })
            .collect();
        Catalog::new(items).unwrap_or_default()
    }

    /// Three-of-five at a $10,000 budget.
    pub fn reference_constraints() -> Constraints {
        Constraints::with_default_budget(3)
    }

    /// Raw priced records as a catalog API would return them.
    pub fn priced_records() -> Vec<RawCatalogRecord> {
        vec![
            json!({ "id": 11, "name": "Pudgy Penguin #11", "price": 1800, "collection": "Pudgy Penguins" }),
            json!({ "id": 12, "name": "Milady #12", "price": "950.25", "collection": "Milady" }),
            json!({ "id": 13, "name": "Moonbird #13", "price": 3100 }),
        ]
    }

    /// Raw metrics records for a point-based contest.
    pub fn metrics_records() -> Vec<RawCatalogRecord> {
        vec![
            json!({ "id": "m1", "name": "Meebit #1", "metrics": { "sales": 40, "transfers": 10, "volume": "120.5" } }),
            json!({ "id": "m2", "name": "Meebit #2", "metrics": { "sales": 20, "transfers": 10, "volume": 241 } }),
            json!({ "id": "m3", "name": "Meebit #3", "metrics": { "sales": 0, "transfers": 0, "volume": 0 } }),
        ]
    }

    /// An open contest closing one hour after `now`.
    pub fn open_contest(id: u64, nft_count: u32, now: i64) -> Contest {
        Contest {
            id,
            title: format!("Contest #{}", id),
            deadline: now + 3_600,
            entry_fee: Amount::from_str_checked("0.01").unwrap_or_default(),
            prize_pool: Amount::from_units(1),
            nft_count,
            active: true,
        }
    }
}
