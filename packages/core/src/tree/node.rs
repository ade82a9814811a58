//! Tree nodes
//!
//! Nodes live in the arena of their [`Tree`](crate::tree::Tree) and refer to
//! their children by [`NodeId`]. Only the tree mints node ids.

use crate::models::Vendor;

/// Handle to a node inside the tree that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena slot of the node
    pub fn index(self) -> usize {
        self.0
    }
}

/// One vendor and its direct downline
#[derive(Debug, Clone)]
pub struct TreeNode {
    vendor: Vendor,
    children: Vec<NodeId>,
    depth: usize,
}

impl TreeNode {
    pub(crate) fn new(vendor: Vendor, depth: usize) -> Self {
        Self {
            vendor,
            children: Vec::new(),
            depth,
        }
    }

    pub fn vendor(&self) -> &Vendor {
        &self.vendor
    }

    pub fn vendor_mut(&mut self) -> &mut Vendor {
        &mut self.vendor
    }

    /// Direct children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of direct children (not the subtree size)
    pub fn number_children(&self) -> usize {
        self.children.len()
    }

    /// Edges between the root and this node
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}
