//! Points scoring for metrics-based catalogs
//!
//! Point-based contests price items by a score derived from on-chain
//! activity instead of a market price. Each metric is normalized to 0–100
//! against the largest value in the current catalog, the normalized values are
//! combined with fixed weights, and the result is scaled and rounded to a whole
//! point score.
//!
//! A metric whose catalog maximum is zero normalizes to 0 for every item.

use super::record::ItemMetrics;
use crate::{Amount, DraftkitError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Weights applied to the normalized metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricWeights {
    pub sales: Decimal,
    pub transfers: Decimal,
    pub volume: Decimal,
    /// Multiplier applied to the weighted sum (0–100 becomes 0–200 at ×2).
    pub scale: Decimal,
}

/// Largest accepted weight or scale.
pub const MAX_WEIGHT: Decimal = dec!(1000000);

impl MetricWeights {
    /// Reject negative weights and weights above [`MAX_WEIGHT`].
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("weights.sales", self.sales),
            ("weights.transfers", self.transfers),
            ("weights.volume", self.volume),
            ("weights.scale", self.scale),
        ];
        for (field, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(DraftkitError::invalid_data(field, "must not be negative"));
            }
            if value > MAX_WEIGHT {
                return Err(DraftkitError::invalid_data(
                    field,
                    format!("must not exceed {}", MAX_WEIGHT),
                ));
            }
        }
        Ok(())
    }
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            sales: dec!(0.3),
            transfers: dec!(0.3),
            volume: dec!(0.4),
            scale: dec!(2),
        }
    }
}

/// Normalize `value` to 0–100 relative to `max`.
fn normalize(value: Decimal, max: Decimal) -> Option<Decimal> {
    if max.is_zero() {
        return Some(Decimal::ZERO);
    }
    value.checked_div(max)?.checked_mul(dec!(100))
}

fn score_one(
    m: &ItemMetrics,
    max: (Decimal, Decimal, Decimal),
    weights: &MetricWeights,
) -> Option<Decimal> {
    let sales = normalize(Decimal::from(m.sales), max.0)?;
    let transfers = normalize(Decimal::from(m.transfers), max.1)?;
    let volume = normalize(m.volume.as_decimal(), max.2)?;

    let weighted = weights
        .sales
        .checked_mul(sales)?
        .checked_add(weights.transfers.checked_mul(transfers)?)?
        .checked_add(weights.volume.checked_mul(volume)?)?;
    let points = weighted
        .checked_mul(weights.scale)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Some(points)
}

/// Score every item of a catalog, in input order.
///
/// The output is a deterministic function of the input metrics.
///
/// # Errors
///
/// Returns [`DraftkitError::CatalogFetch`] if the weights push a score out of
/// Decimal range.
///
/// ```
/// use draftkit_lib::catalog::{score_items, ItemMetrics, MetricWeights};
/// use draftkit_lib::Amount;
///
/// let metrics = vec![
///     ItemMetrics::new(10, 4, Amount::from_units(50)),
///     ItemMetrics::new(5, 0, Amount::from_units(100)),
/// ];
/// let scores = score_items(&metrics, &MetricWeights::default()).unwrap();
/// // (0.3*100 + 0.3*100 + 0.4*50) * 2 = 160
/// assert_eq!(scores[0], Amount::from_units(160));
/// // (0.3*50 + 0.3*0 + 0.4*100) * 2 = 110
/// assert_eq!(scores[1], Amount::from_units(110));
/// ```
pub fn score_items(metrics: &[ItemMetrics], weights: &MetricWeights) -> Result<Vec<Amount>> {
    let max_sales = metrics.iter().map(|m| m.sales).max().unwrap_or(0);
    let max_transfers = metrics.iter().map(|m| m.transfers).max().unwrap_or(0);
    let max_volume = metrics
        .iter()
        .map(|m| m.volume.as_decimal())
        .max()
        .unwrap_or(Decimal::ZERO);
    let max = (
        Decimal::from(max_sales),
        Decimal::from(max_transfers),
        max_volume,
    );

    metrics
        .iter()
        .enumerate()
        .map(|(position, m)| {
            score_one(m, max, weights)
                .map(Amount::from_decimal)
                .ok_or_else(|| {
                    DraftkitError::CatalogFetch(format!("score of record {position} overflowed"))
                })
        })
        .collect()
}
