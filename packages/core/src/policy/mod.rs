//! Rank Qualification Policies
//!
//! The rank pass visits the hierarchy bottom-up and asks a [`RankPolicy`]
//! for each vendor's new rank. By the time a vendor is evaluated, every
//! descendant already carries its updated rank, and the pass hands over a
//! [`DownlineSummary`] built from the children's summaries so policies never
//! rescan the subtree.
//!
//! - [`RankDecisionTable`] - Configurable thresholds, the default policy
//! - Any `Fn(&Tree, NodeId, &DownlineSummary) -> Rank` closure

mod decision_table;

pub use decision_table::{RankCriteria, RankDecisionTable};

use crate::models::Rank;
use crate::tree::{DownlineSummary, NodeId, Tree};

/// Decides the rank a vendor qualifies for given its subtree
pub trait RankPolicy {
    fn qualify(&self, tree: &Tree, node: NodeId, downline: &DownlineSummary) -> Rank;
}

impl<F> RankPolicy for F
where
    F: Fn(&Tree, NodeId, &DownlineSummary) -> Rank,
{
    fn qualify(&self, tree: &Tree, node: NodeId, downline: &DownlineSummary) -> Rank {
        self(tree, node, downline)
    }
}
