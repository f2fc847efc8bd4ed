//! Catalog record mapping
//!
//! Catalog sources deliver loosely-typed JSON records (arbitrary fields from
//! an external API). This module maps them into strict [`CatalogItem`]s at the
//! boundary so nothing undefined travels inward. Any absent or malformed
//! field fails the whole catalog with [`DraftkitError::CatalogFetch`], which the
//! session answers by substituting the fallback catalog.
//!
//! ## Accepted record shapes
//!
//! Priced record:
//!
//! ```json
//! { "id": 1, "name": "Bored Ape #1234", "price": 4500, "collection": "BAYC" }
//! ```
//!
//! Metrics record (point-based contests):
//!
//! ```json
//! { "id": "azuki-3456", "name": "Azuki #3456",
//!   "metrics": { "sales": 12, "transfers": 30, "volume": "84.5" } }
//! ```
//!
//! A catalog must be entirely priced or entirely metrics-based.

use super::scoring::{score_items, MetricWeights};
use super::{Catalog, CatalogItem, ItemId};
use crate::{Amount, DraftkitError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::str::FromStr;

/// A record exactly as the catalog source returned it.
pub type RawCatalogRecord = Value;

/// Raw activity metrics used to derive a point score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetrics {
    pub sales: u64,
    pub transfers: u64,
    pub volume: Amount,
}

impl ItemMetrics {
    pub fn new(sales: u64, transfers: u64, volume: Amount) -> Self {
        Self {
            sales,
            transfers,
            volume,
        }
    }
}

/// How a record prices its item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pricing {
    /// A fixed price taken from the record.
    Price(Amount),
    /// Metrics to be scored against the rest of the catalog.
    Metrics(ItemMetrics),
}

impl CatalogItem {
    /// Render as a priced record, the inverse of [`map_records`] for priced catalogs.
    pub fn to_record(&self) -> RawCatalogRecord {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(self.id.0.clone()));
        fields.insert("name".to_string(), Value::String(self.name.clone()));
        fields.insert("price".to_string(), Value::String(self.cost.to_string()));
        if let Some(collection) = &self.collection {
            fields.insert("collection".to_string(), Value::String(collection.clone()));
        }
        Value::Object(fields)
    }
}

/// A record after field validation, before cost resolution.
#[derive(Clone, Debug)]
struct TypedRecord {
    id: ItemId,
    name: String,
    collection: Option<String>,
    pricing: Pricing,
}

/// Map raw records into a typed catalog.
///
/// Metrics-based records are scored with `weights`; priced records keep
/// their price as cost.
///
/// # Errors
///
/// Returns [`DraftkitError::CatalogFetch`] if the list is empty, any record is
/// malformed, pricing kinds are mixed, or ids repeat.
pub fn map_records(records: &[RawCatalogRecord], weights: &MetricWeights) -> Result<Catalog> {
    if records.is_empty() {
        return Err(DraftkitError::CatalogFetch(
            "source returned no items".to_string(),
        ));
    }

    let typed = records
        .iter()
        .enumerate()
        .map(|(position, raw)| {
            parse_record(raw)
                .map_err(|reason| DraftkitError::CatalogFetch(format!("record {position}: {reason}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let priced = typed
        .iter()
        .filter(|r| matches!(r.pricing, Pricing::Price(_)))
        .count();

    let costs: Vec<Amount> = if priced == typed.len() {
        typed
            .iter()
            .filter_map(|r| match r.pricing {
                Pricing::Price(price) => Some(price),
                Pricing::Metrics(_) => None,
            })
            .collect()
    } else if priced == 0 {
        let metrics: Vec<ItemMetrics> = typed
            .iter()
            .filter_map(|r| match &r.pricing {
                Pricing::Metrics(m) => Some(m.clone()),
                Pricing::Price(_) => None,
            })
            .collect();
        score_items(&metrics, weights)?
    } else {
        return Err(DraftkitError::CatalogFetch(format!(
            "mixed pricing: {} priced and {} metrics records",
            priced,
            typed.len() - priced
        )));
    };

    let items = typed
        .into_iter()
        .zip(costs)
        .map(|(record, cost)| CatalogItem {
            id: record.id,
            name: record.name,
            cost,
            collection: record.collection,
        })
        .collect();

    Catalog::new(items).map_err(DraftkitError::catalog_fetch)
}

fn parse_record(raw: &Value) -> std::result::Result<TypedRecord, String> {
    let fields = raw.as_object().ok_or("record is not an object")?;

    let id = parse_id(fields.get("id"))?;
    let name = match fields.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.trim().to_string(),
        Some(_) => return Err("name must be a non-empty string".to_string()),
        None => return Err("missing name".to_string()),
    };
    let collection = match fields.get("collection") {
        None | Some(Value::Null) => None,
        Some(Value::String(tag)) => Some(tag.clone()),
        Some(_) => return Err("collection must be a string".to_string()),
    };

    let pricing = match (fields.get("price"), fields.get("metrics")) {
        (Some(price), None) => Pricing::Price(parse_non_negative(price, "price")?),
        (None, Some(Value::Object(metrics))) => Pricing::Metrics(parse_metrics(metrics)?),
        (None, Some(_)) => return Err("metrics must be an object".to_string()),
        (Some(_), Some(_)) => return Err("record has both price and metrics".to_string()),
        (None, None) => return Err("missing price or metrics".to_string()),
    };

    Ok(TypedRecord {
        id,
        name,
        collection,
        pricing,
    })
}

fn parse_id(value: Option<&Value>) -> std::result::Result<ItemId, String> {
    match value {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok(ItemId::new(id.trim())),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(ItemId::from)
            .ok_or_else(|| format!("id {n} is not a non-negative integer")),
        Some(_) => Err("id must be a string or integer".to_string()),
        None => Err("missing id".to_string()),
    }
}

fn parse_metrics(fields: &Map<String, Value>) -> std::result::Result<ItemMetrics, String> {
    let count = |key: &str| -> std::result::Result<u64, String> {
        fields
            .get(key)
            .ok_or_else(|| format!("missing metrics.{key}"))?
            .as_u64()
            .ok_or_else(|| format!("metrics.{key} must be a non-negative integer"))
    };

    let volume = fields.get("volume").ok_or("missing metrics.volume")?;

    Ok(ItemMetrics {
        sales: count("sales")?,
        transfers: count("transfers")?,
        volume: parse_non_negative(volume, "metrics.volume")?,
    })
}

fn parse_non_negative(value: &Value, field: &str) -> std::result::Result<Amount, String> {
    let amount = match value {
        Value::Number(n) => number_to_decimal(n)
            .map(Amount::from_decimal)
            .ok_or_else(|| format!("{field} {n} is not representable"))?,
        Value::String(s) => Amount::from_str_checked(s).map_err(|e| e.to_string())?,
        _ => return Err(format!("{field} must be a number or decimal string")),
    };

    if amount.is_negative() {
        return Err(format!("{field} must not be negative"));
    }
    Ok(amount)
}

/// Convert a JSON number to Decimal via its textual form, so `0.1` stays `0.1`.
fn number_to_decimal(n: &Number) -> Option<Decimal> {
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn map(records: Value) -> Result<Catalog> {
        let records = records.as_array().cloned().unwrap();
        map_records(&records, &MetricWeights::default())
    }

    #[test]
    fn test_priced_records_map_to_items() {
        let catalog = map(json!([
            { "id": 1, "name": "Bored Ape #1234", "price": 4500, "collection": "BAYC" },
            { "id": "punk-5678", "name": "Crypto Punk #5678", "price": "3800.50" }
        ]))
        .unwrap();

        let ape = catalog.get(&ItemId::from(1u64)).unwrap();
        assert_eq!(ape.cost, Amount::from_units(4500));
        assert_eq!(ape.collection.as_deref(), Some("BAYC"));

        let punk = catalog.get(&"punk-5678".into()).unwrap();
        assert_eq!(punk.cost.as_decimal(), dec!(3800.50));
        assert_eq!(punk.collection, None);
    }

    #[test]
    fn test_float_prices_keep_their_decimal_text() {
        let catalog = map(json!([{ "id": 1, "name": "A", "price": 0.1 }])).unwrap();
        assert_eq!(catalog.items()[0].cost.as_decimal(), dec!(0.1));
    }

    #[test]
    fn test_metrics_records_are_scored() {
        let catalog = map(json!([
            { "id": 1, "name": "A", "metrics": { "sales": 10, "transfers": 4, "volume": 50 } },
            { "id": 2, "name": "B", "metrics": { "sales": 5, "transfers": 0, "volume": "100" } }
        ]))
        .unwrap();

        assert_eq!(catalog.items()[0].cost, Amount::from_units(160));
        assert_eq!(catalog.items()[1].cost, Amount::from_units(110));
    }

    #[test]
    fn test_malformed_records_fail_as_catalog_fetch() {
        let cases = [
            json!([]),
            json!([42]),
            json!([{ "name": "no id", "price": 1 }]),
            json!([{ "id": 1, "price": 1 }]),
            json!([{ "id": 1, "name": "  ", "price": 1 }]),
            json!([{ "id": 1, "name": "A" }]),
            json!([{ "id": 1, "name": "A", "price": -3 }]),
            json!([{ "id": 1, "name": "A", "price": "cheap" }]),
            json!([{ "id": -1, "name": "A", "price": 1 }]),
            json!([{ "id": 1, "name": "A", "price": 1, "collection": 7 }]),
            json!([{ "id": 1, "name": "A", "metrics": { "sales": 1, "transfers": 1 } }]),
            json!([{ "id": 1, "name": "A", "price": 1, "metrics": {} }]),
            json!([{ "id": 1, "name": "A", "price": 1 }, { "id": 1, "name": "B", "price": 2 }]),
        ];

        for case in cases {
            let result = map(case.clone());
            assert!(
                matches!(result, Err(DraftkitError::CatalogFetch(_))),
                "expected catalog fetch error for {case}"
            );
        }
    }

    #[test]
    fn test_score_overflow_fails_as_catalog_fetch() {
        let weights = MetricWeights {
            scale: Decimal::MAX,
            ..MetricWeights::default()
        };
        let records = vec![json!({ "id": 1, "name": "A", "metrics": { "sales": 3, "transfers": 1, "volume": 9 } })];

        let err = map_records(&records, &weights).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_mixed_pricing_rejected() {
        let result = map(json!([
            { "id": 1, "name": "A", "price": 10 },
            { "id": 2, "name": "B", "metrics": { "sales": 1, "transfers": 1, "volume": 1 } }
        ]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("mixed pricing"));
    }
}
