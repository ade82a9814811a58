//! Vendor Rank Tiers
//!
//! Ranks form a closed, totally ordered set. The order drives promotion
//! direction: a level-up bonus is only paid when the rank increases.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rank tier of a vendor, ordered `Cobre < Bronce < Plata < Oro`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    /// Entry tier
    Cobre,
    Bronce,
    Plata,
    /// Highest tier
    Oro,
}

impl Rank {
    /// Every rank in ascending order
    pub const ALL: [Rank; 4] = [Rank::Cobre, Rank::Bronce, Rank::Plata, Rank::Oro];

    /// Textual code used in input records and reports
    pub fn code(self) -> &'static str {
        match self {
            Self::Cobre => "COBRE",
            Self::Bronce => "BRONCE",
            Self::Plata => "PLATA",
            Self::Oro => "ORO",
        }
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COBRE" => Ok(Self::Cobre),
            "BRONCE" => Ok(Self::Bronce),
            "PLATA" => Ok(Self::Plata),
            "ORO" => Ok(Self::Oro),
            _ => Err(format!("Invalid rank: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
