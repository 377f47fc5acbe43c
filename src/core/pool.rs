//! The yield-pool catalog.
//!
//! Four pools with fixed risk/return profiles, immutable for the process
//! lifetime. Each pool's yearly return rule is a [`ReturnProfile`] variant,
//! so resolution is a total match rather than a branch on runtime shape.

use serde::{Deserialize, Serialize};

/// Pool identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolId {
    A,
    B,
    C,
    D,
}

impl PoolId {
    /// All pool ids, in catalog order.
    pub const ALL: [PoolId; 4] = [PoolId::A, PoolId::B, PoolId::C, PoolId::D];

    /// The pool's letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PoolId::A => 'A',
            PoolId::B => 'B',
            PoolId::C => 'C',
            PoolId::D => 'D',
        }
    }
}

impl std::fmt::Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pool {}", self.letter())
    }
}

/// Yearly return rule for a pool.
///
/// All values are percentages (5.0 means 5%); the resolver converts to
/// fractional rates at resolution time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReturnProfile {
    /// Deterministic return, consumes no randomness.
    Fixed { rate_percent: f64 },
    /// Full rate, or a fixed loss with the given probability.
    BinaryRisk {
        rate_percent: f64,
        loss_chance_percent: f64,
        loss_percent: f64,
    },
    /// Uniform draw in the closed percent range. The sampled value itself
    /// may be negative; there is no separate loss branch.
    Range { min_percent: f64, max_percent: f64 },
}

/// A yield pool: identifier plus return rule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: PoolId,
    pub profile: ReturnProfile,
}

impl Pool {
    /// The static pool catalog.
    ///
    /// | Pool | Return      | Loss rule          |
    /// |------|-------------|--------------------|
    /// | A    | 5%          | none               |
    /// | B    | 10%         | 50% chance of -10% |
    /// | C    | -25% to 25% | random             |
    /// | D    | 15%         | 30% chance of -15% |
    #[must_use]
    pub const fn catalog() -> [Pool; 4] {
        [
            Pool {
                id: PoolId::A,
                profile: ReturnProfile::Fixed { rate_percent: 5.0 },
            },
            Pool {
                id: PoolId::B,
                profile: ReturnProfile::BinaryRisk {
                    rate_percent: 10.0,
                    loss_chance_percent: 50.0,
                    loss_percent: 10.0,
                },
            },
            Pool {
                id: PoolId::C,
                profile: ReturnProfile::Range {
                    min_percent: -25.0,
                    max_percent: 25.0,
                },
            },
            Pool {
                id: PoolId::D,
                profile: ReturnProfile::BinaryRisk {
                    rate_percent: 15.0,
                    loss_chance_percent: 30.0,
                    loss_percent: 15.0,
                },
            },
        ]
    }

    /// Look up a catalog pool by id.
    #[must_use]
    pub fn get(id: PoolId) -> Pool {
        // Catalog order matches PoolId::ALL
        Pool::catalog()[id as usize]
    }

    /// Human-readable return description ("5%", "-25% to 25%").
    #[must_use]
    pub fn describe_return(&self) -> String {
        match self.profile {
            ReturnProfile::Fixed { rate_percent } => format_percent(rate_percent),
            ReturnProfile::BinaryRisk { rate_percent, .. } => format_percent(rate_percent),
            ReturnProfile::Range {
                min_percent,
                max_percent,
            } => format!(
                "{} to {}",
                format_percent(min_percent),
                format_percent(max_percent)
            ),
        }
    }

    /// Human-readable risk description ("no risk", "50% chance of -10%",
    /// "random").
    #[must_use]
    pub fn describe_risk(&self) -> String {
        match self.profile {
            ReturnProfile::Fixed { .. } => "no risk".to_string(),
            ReturnProfile::BinaryRisk {
                loss_chance_percent,
                loss_percent,
                ..
            } => format!(
                "{} chance of -{}",
                format_percent(loss_chance_percent),
                format_percent(loss_percent)
            ),
            ReturnProfile::Range { .. } => "random".to_string(),
        }
    }
}

/// Format a percentage, dropping the fraction for whole values.
fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{}%", percent as i64)
    } else {
        format!("{percent}%")
    }
}
