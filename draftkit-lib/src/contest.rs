//! Contest read-model
//!
//! Contests are created and settled by an external contract; this module only
//! models what a client reads back: the record, its display status, the time
//! remaining, and the selection limits it implies.

use crate::selection::Constraints;
use crate::{Amount, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Decimals of the contract's fee token (wei → ETH).
pub const FEE_TOKEN_DECIMALS: u32 = 18;

/// A contest as read from the contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: u64,
    pub title: String,
    /// Entry deadline, unix seconds.
    pub deadline: i64,
    /// Entry fee in ETH.
    pub entry_fee: Amount,
    /// Prize pool in ETH.
    pub prize_pool: Amount,
    /// Number of NFTs an entry must contain.
    pub nft_count: u32,
    pub active: bool,
}

/// Display status of a contest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    /// Open, with less than a day to the deadline.
    Active,
    /// Open, with a day or more to the deadline.
    Upcoming,
    Ended,
}

impl fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Ended => "ended",
        })
    }
}

/// Contest list filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestFilter {
    #[default]
    All,
    Active,
    Upcoming,
}

impl ContestFilter {
    pub fn matches(&self, contest: &Contest, now: i64) -> bool {
        match self {
            Self::All => true,
            Self::Active => contest.status(now) == ContestStatus::Active,
            Self::Upcoming => contest.status(now) == ContestStatus::Upcoming,
        }
    }
}

impl Contest {
    /// Build a contest from raw contract values (fees in wei).
    ///
    /// Returns `None` if a fee does not fit an [`Amount`].
    pub fn from_contract(
        id: u64,
        title: impl Into<String>,
        deadline: i64,
        entry_fee_wei: u128,
        prize_pool_wei: u128,
        nft_count: u32,
        active: bool,
    ) -> Option<Self> {
        Some(Self {
            id,
            title: title.into(),
            deadline,
            entry_fee: Amount::from_base_units(entry_fee_wei, FEE_TOKEN_DECIMALS)?,
            prize_pool: Amount::from_base_units(prize_pool_wei, FEE_TOKEN_DECIMALS)?,
            nft_count,
            active,
        })
    }

    pub fn status(&self, now: i64) -> ContestStatus {
        if !self.active || self.deadline <= now {
            return ContestStatus::Ended;
        }
        if self.deadline.saturating_sub(now) < SECS_PER_DAY {
            ContestStatus::Active
        } else {
            ContestStatus::Upcoming
        }
    }

    /// Whether entries are still accepted.
    pub fn is_open(&self, now: i64) -> bool {
        self.status(now) != ContestStatus::Ended
    }

    /// Remaining time as `"{d}d {h}h {m}m"`, or `"Ended"`.
    pub fn time_left(&self, now: i64) -> String {
        let left = self.deadline.saturating_sub(now);
        if left <= 0 {
            return "Ended".to_string();
        }
        format!(
            "{}d {}h {}m",
            left / SECS_PER_DAY,
            (left % SECS_PER_DAY) / SECS_PER_HOUR,
            (left % SECS_PER_HOUR) / SECS_PER_MINUTE
        )
    }

    /// Selection limits for an entry into this contest.
    pub fn constraints(&self, budget_limit: Amount) -> Result<Constraints> {
        Constraints::new(self.nft_count as usize, budget_limit)
    }
}

/// Contests passing `filter` at `now`, in input order.
pub fn filter_contests<'a>(
    contests: &'a [Contest],
    filter: ContestFilter,
    now: i64,
) -> impl Iterator<Item = &'a Contest> + 'a {
    contests.iter().filter(move |c| filter.matches(c, now))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn contest(deadline: i64, active: bool) -> Contest {
        Contest::from_contract(
            1,
            "Blue Chip Weekly",
            deadline,
            10_000_000_000_000_000,
            2_500_000_000_000_000_000,
            5,
            active,
        )
        .unwrap()
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(contest(NOW + 3_600, true).status(NOW), ContestStatus::Active);
        assert_eq!(
            contest(NOW + SECS_PER_DAY, true).status(NOW),
            ContestStatus::Upcoming
        );
        assert_eq!(contest(NOW, true).status(NOW), ContestStatus::Ended);
        assert_eq!(contest(NOW + 3_600, false).status(NOW), ContestStatus::Ended);
        assert!(!contest(NOW - 1, true).is_open(NOW));
    }

    #[test]
    fn test_time_left_format() {
        let c = contest(NOW + 2 * SECS_PER_DAY + 3 * SECS_PER_HOUR + 4 * 60 + 59, true);
        assert_eq!(c.time_left(NOW), "2d 3h 4m");
        assert_eq!(contest(NOW - 10, true).time_left(NOW), "Ended");
    }

    #[test]
    fn test_extreme_deadlines() {
        let past = contest(i64::MIN, true);
        assert_eq!(past.time_left(NOW), "Ended");
        assert_eq!(past.status(NOW), ContestStatus::Ended);

        let far = contest(i64::MAX, true);
        assert_eq!(far.status(i64::MIN), ContestStatus::Upcoming);
        assert!(far.time_left(i64::MIN).ends_with('m'));
        assert_eq!(far.status(NOW), ContestStatus::Upcoming);
    }

    #[test]
    fn test_fees_converted_from_wei() {
        let c = contest(NOW, true);
        assert_eq!(c.entry_fee.to_string(), "0.01");
        assert_eq!(c.prize_pool.to_string(), "2.5");
    }

    #[test]
    fn test_filter() {
        let contests = vec![
            contest(NOW + 60, true),
            contest(NOW + 5 * SECS_PER_DAY, true),
            contest(NOW - 60, true),
        ];

        assert_eq!(filter_contests(&contests, ContestFilter::All, NOW).count(), 3);
        assert_eq!(filter_contests(&contests, ContestFilter::Active, NOW).count(), 1);
        assert_eq!(filter_contests(&contests, ContestFilter::Upcoming, NOW).count(), 1);
    }

    #[test]
    fn test_constraints_use_nft_count() {
        let c = contest(NOW + 60, true);
        let constraints = c.constraints(Amount::from_units(10_000)).unwrap();
        assert_eq!(constraints.required_count, 5);
    }
}
