//! Pool outcome resolution.
//!
//! One realized rate per pool per year (never per player), so every player
//! who chose the same pool in the same year receives an identical outcome.
//!
//! Draw discipline: `Fixed` consumes no draws; `BinaryRisk` and `Range`
//! consume exactly one each, regardless of player count.

use rustc_hash::FxHashMap;

use crate::core::pool::{Pool, PoolId, ReturnProfile};
use crate::core::rng::RateSource;

/// Realized fractional rates for one year, keyed by pool.
///
/// A rate of `0.05` means +5% applied to the balance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoolOutcomes {
    rates: FxHashMap<PoolId, f64>,
}

impl PoolOutcomes {
    /// The realized rate for a pool, if it was resolved this year.
    #[must_use]
    pub fn rate(&self, pool: PoolId) -> Option<f64> {
        self.rates.get(&pool).copied()
    }

    /// Iterate over (pool, realized rate) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PoolId, f64)> + '_ {
        self.rates.iter().map(|(&pool, &rate)| (pool, rate))
    }

    /// Number of resolved pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether no pools were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Resolve one year of outcomes for the given pools.
///
/// ```
/// use yield_clash::core::{Pool, PoolId, ScriptedRates};
/// use yield_clash::resolver::resolve_year;
///
/// // B draws 0.9 (no loss), C draws 0.5 (midpoint), D draws 0.1 (loss)
/// let mut rates = ScriptedRates::new(vec![0.9, 0.5, 0.1]);
/// let outcomes = resolve_year(&Pool::catalog(), &mut rates);
///
/// assert_eq!(outcomes.rate(PoolId::A), Some(0.05));
/// assert_eq!(outcomes.rate(PoolId::B), Some(0.10));
/// assert_eq!(outcomes.rate(PoolId::C), Some(0.0));
/// assert_eq!(outcomes.rate(PoolId::D), Some(-0.15));
/// ```
pub fn resolve_year(pools: &[Pool], rates: &mut impl RateSource) -> PoolOutcomes {
    let mut resolved = FxHashMap::default();

    for pool in pools {
        let rate = match pool.profile {
            ReturnProfile::Fixed { rate_percent } => rate_percent / 100.0,
            ReturnProfile::BinaryRisk {
                rate_percent,
                loss_chance_percent,
                loss_percent,
            } => {
                let loses = rates.next_unit() < loss_chance_percent / 100.0;
                if loses {
                    -loss_percent / 100.0
                } else {
                    rate_percent / 100.0
                }
            }
            ReturnProfile::Range {
                min_percent,
                max_percent,
            } => {
                let sampled = rates.next_unit() * (max_percent - min_percent) + min_percent;
                sampled / 100.0
            }
        };

        resolved.insert(pool.id, rate);
    }

    PoolOutcomes { rates: resolved }
}
