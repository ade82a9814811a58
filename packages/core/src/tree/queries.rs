//! Structural and aggregation queries
//!
//! Every query walks the subtree with an explicit stack, never recursion, so
//! deep hierarchies cannot exhaust the call stack. Walks visit descendants in
//! depth-first pre-order with children in insertion order, which makes
//! "first match" queries deterministic.

use crate::models::Rank;
use crate::tree::{NodeId, Tree};

/// Aggregates over the strict descendants of a node
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DownlineSummary {
    /// Monthly sales summed over every descendant
    pub sales: f64,
    /// Highest current rank held by a descendant, `None` for a leaf
    pub best_rank: Option<Rank>,
}

impl DownlineSummary {
    /// Fold one direct child and its own summary into this one
    pub(crate) fn absorb(&mut self, sales: f64, rank: Rank, below: &DownlineSummary) {
        self.sales += sales + below.sales;
        self.best_rank = self.best_rank.max(Some(rank)).max(below.best_rank);
    }

    /// Whether some descendant holds `rank` or above
    pub fn has_rank_at_least(&self, rank: Rank) -> bool {
        self.best_rank.is_some_and(|best| best >= rank)
    }
}

/// Depth-first pre-order walk over the strict descendants of a node
///
/// Yields `(node, level)` where `level` counts edges below the starting node.
/// An optional level bound stops the walk from descending further.
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
    max_level: Option<usize>,
}

impl<'a> Descendants<'a> {
    fn new(tree: &'a Tree, node: NodeId, max_level: Option<usize>) -> Self {
        let mut walk = Self {
            tree,
            stack: Vec::new(),
            max_level,
        };
        walk.push_children(node, 1);
        walk
    }

    fn push_children(&mut self, node: NodeId, level: usize) {
        if self.max_level.is_some_and(|max| level > max) {
            return;
        }

        let tree = self.tree;
        let children = tree.node(node).children();
        self.stack
            .extend(children.iter().rev().map(|child| (*child, level)));
    }
}

impl Iterator for Descendants<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, level) = self.stack.pop()?;
        self.push_children(node, level + 1);
        Some((node, level))
    }
}

impl Tree {
    /// Walk every strict descendant of `node`
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        Descendants::new(self, node, None)
    }

    /// Walk the descendants of `node` at most `max_level` edges below it
    pub fn descendants_within(&self, node: NodeId, max_level: usize) -> Descendants<'_> {
        Descendants::new(self, node, Some(max_level))
    }

    /// `node` followed by its descendants in pre-order
    ///
    /// Reversing the result gives an order in which every node comes after
    /// all of its descendants.
    pub fn subtree(&self, node: NodeId) -> Vec<NodeId> {
        std::iter::once(node)
            .chain(self.descendants(node).map(|(id, _)| id))
            .collect()
    }

    /// Edges between `node` and its deepest descendant, 0 for a leaf
    pub fn count_tree_levels(&self, node: NodeId) -> usize {
        self.descendants(node)
            .map(|(_, level)| level)
            .max()
            .unwrap_or(0)
    }

    /// Number of descendants exactly `level` edges below `node`
    pub fn count_children_by_level(&self, node: NodeId, level: usize) -> usize {
        self.nodes_at_level(node, level).count()
    }

    /// Sum of the monthly sales of every strict descendant
    pub fn calculate_children_sales(&self, node: NodeId) -> f64 {
        self.descendants(node)
            .map(|(id, _)| self.node(id).vendor().sales_monthly())
            .fold(0.0, |total, sales| total + sales)
    }

    /// Sum of the monthly sales of the descendants exactly `level` edges below
    pub fn calculate_children_sales_by_level(&self, node: NodeId, level: usize) -> f64 {
        self.nodes_at_level(node, level)
            .map(|id| self.node(id).vendor().sales_monthly())
            .fold(0.0, |total, sales| total + sales)
    }

    /// Downline sales and best descendant rank of `node` in one walk
    pub fn downline_summary(&self, node: NodeId) -> DownlineSummary {
        self.descendants(node)
            .fold(DownlineSummary::default(), |mut summary, (id, _)| {
                let vendor = self.node(id).vendor();
                summary.absorb(
                    vendor.sales_monthly(),
                    vendor.current_rank(),
                    &DownlineSummary::default(),
                );
                summary
            })
    }

    /// First descendant, in pre-order, whose current rank is `rank`
    pub fn exists_child_with_rank(&self, node: NodeId, rank: Rank) -> Option<NodeId> {
        self.descendants(node)
            .map(|(id, _)| id)
            .find(|id| self.node(*id).vendor().current_rank() == rank)
    }

    fn nodes_at_level(&self, node: NodeId, level: usize) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants_within(node, level)
            .filter(move |(_, depth)| *depth == level)
            .map(|(id, _)| id)
    }
}
