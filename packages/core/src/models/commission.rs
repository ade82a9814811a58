//! Commission Percentages and Rate Tables
//!
//! Percentages are stored as integer basis points (1% = 100 bp). Keeping the
//! tables integral means the description text never shows floating point
//! noise and `sales × rate` is exact for whole-unit sales figures.
//!
//! # Tables
//!
//! | table      | key   | COBRE | BRONCE | PLATA | ORO |
//! |------------|-------|-------|--------|-------|-----|
//! | personal   | rank  | 10%   | 15%    | 20%   | 25% |
//! | level up   | rank  | -     | 5%     | 10%   | 15% |
//!
//! Override (level) percentages are keyed by depth: level 1 → 1%,
//! level 2 → 2%, level 3 → 3%. Deeper levels are never paid.

use crate::models::Rank;
use serde::{Deserialize, Serialize};

/// Label of the commission paid on a vendor's own sales
pub const PERSONAL_LABEL: &str = "personal";

/// Label of the one-off bonus paid in the pass where a rank improved
pub const LEVEL_UP_LABEL: &str = "level up";

/// Number of downline levels that earn override commission
pub const TRACKED_LEVELS: usize = 3;

/// Label of the override commission for descendants `level` edges below
pub fn level_label(level: usize) -> String {
    format!("level {}", level)
}

/// A percentage expressed in basis points
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percentage(u32);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);

    /// Create from a whole percentage (`from_percent(20)` is 20%)
    pub const fn from_percent(percent: u32) -> Self {
        Self(percent * 100)
    }

    pub const fn from_basis_points(basis_points: u32) -> Self {
        Self(basis_points)
    }

    pub fn basis_points(self) -> u32 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// The percentage as a fraction (20% → 0.2)
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 10_000.0
    }

    /// Apply the percentage to an amount
    pub fn apply(self, amount: f64) -> f64 {
        amount * f64::from(self.0) / 10_000.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / 100;
        let cents = self.0 % 100;

        if cents == 0 {
            write!(f, "{}%", whole)
        } else if cents % 10 == 0 {
            write!(f, "{}.{}%", whole, cents / 10)
        } else {
            write!(f, "{}.{:02}%", whole, cents)
        }
    }
}

/// One percentage per rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTable {
    pub cobre: Percentage,
    pub bronce: Percentage,
    pub plata: Percentage,
    pub oro: Percentage,
}

impl RankTable {
    pub fn get(&self, rank: Rank) -> Percentage {
        match rank {
            Rank::Cobre => self.cobre,
            Rank::Bronce => self.bronce,
            Rank::Plata => self.plata,
            Rank::Oro => self.oro,
        }
    }
}

/// Fixed percentage tables used by the commission pass
///
/// The default is the standard schedule documented at module level. A
/// schedule can also be deserialized as part of
/// [`HierarchyConfig`](crate::config::HierarchyConfig).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSchedule {
    /// Personal commission keyed by current rank
    pub personal: RankTable,

    /// Level-up bonus keyed by the newly reached rank
    ///
    /// The COBRE entry is never used because COBRE cannot be reached by a
    /// promotion.
    pub level_up: RankTable,

    /// Override percentages for levels 1..=TRACKED_LEVELS
    pub levels: [Percentage; TRACKED_LEVELS],
}

impl CommissionSchedule {
    /// Personal percentage for a rank
    pub fn personal_rate(&self, rank: Rank) -> Percentage {
        self.personal.get(rank)
    }

    /// Level-up percentage for a newly reached rank
    pub fn level_up_rate(&self, rank: Rank) -> Percentage {
        self.level_up.get(rank)
    }

    /// Override percentage for a level, `None` outside 1..=TRACKED_LEVELS
    pub fn level_rate(&self, level: usize) -> Option<Percentage> {
        level
            .checked_sub(1)
            .and_then(|index| self.levels.get(index))
            .copied()
    }
}

impl Default for CommissionSchedule {
    fn default() -> Self {
        Self {
            personal: RankTable {
                cobre: Percentage::from_percent(10),
                bronce: Percentage::from_percent(15),
                plata: Percentage::from_percent(20),
                oro: Percentage::from_percent(25),
            },
            level_up: RankTable {
                cobre: Percentage::ZERO,
                bronce: Percentage::from_percent(5),
                plata: Percentage::from_percent(10),
                oro: Percentage::from_percent(15),
            },
            levels: [
                Percentage::from_percent(1),
                Percentage::from_percent(2),
                Percentage::from_percent(3),
            ],
        }
    }
}
