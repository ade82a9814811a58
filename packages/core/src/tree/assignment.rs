//! Rank and commission passes
//!
//! A batch runs two full passes over the hierarchy:
//!
//! 1. **Ranks** (bottom-up): every vendor is re-ranked after all of its
//!    descendants, so a [`RankPolicy`] can rely on the updated ranks below.
//!    Downline summaries are folded from the children's summaries.
//! 2. **Commissions**: every vendor receives its level-up bonus, personal
//!    percentage and override percentages, then is credited the override
//!    income of its first three downline levels.
//!
//! Each pass touches every node of the subtree exactly once.

use crate::models::{level_label, TRACKED_LEVELS};
use crate::policy::RankPolicy;
use crate::tree::{DownlineSummary, HierarchyError, NodeId, Tree};

/// Rank changes made by one rank pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankSummary {
    pub promoted: usize,
    pub demoted: usize,
    pub unchanged: usize,
}

impl Tree {
    /// Re-rank every vendor of the subtree with the configured decision table
    pub fn assign_ranks(&mut self, node: NodeId) -> RankSummary {
        let table = self.config().ranks.clone();
        self.assign_ranks_with(node, &table)
    }

    /// Re-rank every vendor of the subtree with an explicit policy
    ///
    /// Descendants are ranked before their ancestors. Every vendor's previous
    /// rank is overwritten, even when the rank does not change.
    pub fn assign_ranks_with<P>(&mut self, node: NodeId, policy: &P) -> RankSummary
    where
        P: RankPolicy + ?Sized,
    {
        let mut summary = RankSummary::default();
        let mut downlines = vec![DownlineSummary::default(); self.len()];

        for id in self.subtree(node).into_iter().rev() {
            let mut downline = DownlineSummary::default();
            for child in self.node(id).children() {
                let vendor = self.node(*child).vendor();
                downline.absorb(
                    vendor.sales_monthly(),
                    vendor.current_rank(),
                    &downlines[child.index()],
                );
            }
            downlines[id.index()] = downline;

            let rank = policy.qualify(self, id, &downline);
            let vendor = self.node_mut(id).vendor_mut();
            let before = vendor.current_rank();
            vendor.set_current_rank(rank);

            if rank > before {
                summary.promoted += 1;
            } else if rank < before {
                summary.demoted += 1;
            } else {
                summary.unchanged += 1;
            }
        }

        tracing::info!(
            "Rank pass: {} promoted, {} demoted, {} unchanged",
            summary.promoted,
            summary.demoted,
            summary.unchanged
        );

        summary
    }

    /// Assign commissions to every vendor of the subtree
    ///
    /// For each vendor, in order: level-up bonus, personal percentage,
    /// override percentages for as many levels as its subtree is deep (at
    /// most three), then the override income of its downline is added to the
    /// accumulated commission. Running the pass twice on the same tree
    /// credits the override income twice.
    pub fn assign_commissions(&mut self, node: NodeId) {
        let schedule = self.config().commissions.clone();
        let order = self.subtree(node);

        // Heights from the bottom up: every child is seen before its parent.
        let mut heights = vec![0usize; self.len()];
        for id in order.iter().rev() {
            heights[id.index()] = self
                .node(*id)
                .children()
                .iter()
                .map(|child| heights[child.index()] + 1)
                .max()
                .unwrap_or(0);
        }

        for id in &order {
            let vendor = self.node_mut(*id).vendor_mut();
            vendor.assign_level_up_commission(&schedule);
            vendor.assign_personal_commission(&schedule);
            vendor.assign_level_commission(&schedule, heights[id.index()]);

            let level_commission = self.calculate_level_commission(*id);
            self.node_mut(*id)
                .vendor_mut()
                .add_level_commission(level_commission);
        }

        tracing::info!("Commission pass over {} vendor(s)", order.len());
    }

    /// Override income of `node` from its first three downline levels
    ///
    /// Each level's sales are weighted by the vendor's `level N` percentage.
    /// A level without a recorded percentage uses the configured schedule
    /// rate, provided the subtree reaches that deep, so the result does not
    /// depend on a prior commission pass.
    pub fn calculate_level_commission(&self, node: NodeId) -> f64 {
        let vendor = self.node(node).vendor();
        let schedule = &self.config().commissions;
        let height = self.count_tree_levels(node).min(TRACKED_LEVELS);

        (1..=height)
            .filter_map(|level| {
                vendor
                    .commission_type(&level_label(level))
                    .or_else(|| schedule.level_rate(level))
                    .map(|percentage| {
                        percentage.apply(self.calculate_children_sales_by_level(node, level))
                    })
            })
            .fold(0.0, |total, amount| total + amount)
    }

    /// Run the rank pass and then the commission pass from the root
    ///
    /// # Errors
    ///
    /// `EmptyTree` if no vendor has been inserted.
    pub fn process(&mut self) -> Result<RankSummary, HierarchyError> {
        let root = self.root().ok_or(HierarchyError::EmptyTree)?;
        let summary = self.assign_ranks(root);
        self.assign_commissions(root);
        Ok(summary)
    }
}
