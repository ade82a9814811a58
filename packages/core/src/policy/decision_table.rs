//! Threshold-based rank qualification
//!
//! A [`RankDecisionTable`] holds one [`RankCriteria`] row per rank above the
//! fallback. Rows are tried from the highest rank down and the first row the
//! vendor satisfies decides the rank. A vendor that meets no row gets the
//! fallback rank.
//!
//! Standard table:
//!
//! | rank   | own sales | direct children | downline sales | descendant rank |
//! |--------|-----------|-----------------|----------------|-----------------|
//! | ORO    | 400 000   | 3               | 5 000 000      | PLATA or above  |
//! | PLATA  | 300 000   | 2               | 500 000        | -               |
//! | BRONCE | 200 000   | 1               | 0              | -               |

use crate::models::Rank;
use crate::policy::RankPolicy;
use crate::tree::{DownlineSummary, NodeId, Tree};
use serde::{Deserialize, Serialize};

/// Minimums a vendor must meet to hold `rank`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankCriteria {
    pub rank: Rank,

    /// Minimum own monthly sales
    #[serde(default)]
    pub min_personal_sales: f64,

    /// Minimum number of direct children
    #[serde(default)]
    pub min_direct_children: usize,

    /// Minimum sales summed over every descendant
    #[serde(default)]
    pub min_downline_sales: f64,

    /// Some descendant must hold at least this rank
    #[serde(default)]
    pub min_descendant_rank: Option<Rank>,
}

impl RankCriteria {
    fn is_met_by(&self, tree: &Tree, node: NodeId, downline: &DownlineSummary) -> bool {
        let tree_node = tree.node(node);

        tree_node.vendor().sales_monthly() >= self.min_personal_sales
            && tree_node.number_children() >= self.min_direct_children
            && downline.sales >= self.min_downline_sales
            && self
                .min_descendant_rank
                .map_or(true, |minimum| downline.has_rank_at_least(minimum))
    }
}

/// Ordered set of rank thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankDecisionTable {
    pub criteria: Vec<RankCriteria>,

    /// Rank of a vendor that meets no row
    pub fallback: Rank,
}

impl RankDecisionTable {
    /// Rank the vendor at `node` qualifies for
    ///
    /// `downline` must describe the strict descendants of `node`, as
    /// returned by [`Tree::downline_summary`].
    pub fn evaluate(&self, tree: &Tree, node: NodeId, downline: &DownlineSummary) -> Rank {
        Rank::ALL
            .iter()
            .rev()
            .copied()
            .find(|rank| {
                self.criteria
                    .iter()
                    .filter(|criteria| criteria.rank == *rank)
                    .any(|criteria| criteria.is_met_by(tree, node, downline))
            })
            .unwrap_or(self.fallback)
    }
}

impl RankPolicy for RankDecisionTable {
    fn qualify(&self, tree: &Tree, node: NodeId, downline: &DownlineSummary) -> Rank {
        self.evaluate(tree, node, downline)
    }
}

impl Default for RankDecisionTable {
    fn default() -> Self {
        Self {
            criteria: vec![
                RankCriteria {
                    rank: Rank::Oro,
                    min_personal_sales: 400_000.0,
                    min_direct_children: 3,
                    min_downline_sales: 5_000_000.0,
                    min_descendant_rank: Some(Rank::Plata),
                },
                RankCriteria {
                    rank: Rank::Plata,
                    min_personal_sales: 300_000.0,
                    min_direct_children: 2,
                    min_downline_sales: 500_000.0,
                    min_descendant_rank: None,
                },
                RankCriteria {
                    rank: Rank::Bronce,
                    min_personal_sales: 200_000.0,
                    min_direct_children: 1,
                    min_downline_sales: 0.0,
                    min_descendant_rank: None,
                },
            ],
            fallback: Rank::Cobre,
        }
    }
}
