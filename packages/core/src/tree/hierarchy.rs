//! Tree storage, construction and lookup
//!
//! # Architecture
//!
//! - **Arena**: every [`TreeNode`] lives in one `Vec`, children are referenced
//!   by [`NodeId`]. Parents own their children through the arena; there are no
//!   back-pointers.
//! - **Index**: `VendorId → NodeId` map, so resolving a parent during bulk
//!   insertion is O(1) instead of a subtree search.
//! - **Acyclic by construction**: a vendor can only attach below a node that
//!   already exists, so cyclic parent declarations never resolve.
//! - **Depth ceiling**: insertion refuses nodes deeper than
//!   [`HierarchyConfig::max_depth`], which bounds every traversal.
//!
//! # Bulk Insertion
//!
//! Input records come in no particular order. [`Tree::insert_nodes_from_list`]
//! sweeps the pending records repeatedly, placing every record whose parent is
//! already present, until nothing is pending or a sweep places nothing.

use crate::config::{HierarchyConfig, UnresolvedRecordPolicy};
use crate::models::{Vendor, VendorId, VendorRecord, VendorReport, NO_PARENT};
use crate::tree::{HierarchyError, NodeId, TreeNode};
use std::collections::HashMap;

/// A record that bulk insertion could not place
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRecord {
    pub record: VendorRecord,
    pub reason: HierarchyError,
}

/// Outcome of [`Tree::insert_nodes_from_list`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkInsertReport {
    /// Records placed in the tree
    pub inserted: usize,
    /// Sweeps over the pending records, including the final one without progress
    pub sweeps: usize,
    /// Records left out, with the reason of their last failed attempt
    pub dropped: Vec<DroppedRecord>,
}

impl BulkInsertReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

/// Vendor hierarchy
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    index: HashMap<VendorId, NodeId>,
    root: Option<NodeId>,
    config: HierarchyConfig,
}

impl Tree {
    /// Create an empty tree with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with a custom configuration
    pub fn with_config(config: HierarchyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of vendors in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root_node(&self) -> Option<&TreeNode> {
        self.root.map(|id| self.node(id))
    }

    /// Node behind a handle
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by another tree.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Mutable node behind a handle
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by another tree.
    pub fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    /// Handle of the node holding vendor `cedula`
    ///
    /// Returns `None` when the tree is empty or holds no such vendor.
    pub fn find(&self, cedula: VendorId) -> Option<NodeId> {
        self.index.get(&cedula).copied()
    }

    /// Node holding vendor `cedula`
    pub fn get(&self, cedula: VendorId) -> Option<&TreeNode> {
        self.find(cedula).map(|id| self.node(id))
    }

    /// Insert a vendor below the vendor `parent_id`
    ///
    /// With `parent_id == NO_PARENT` the vendor becomes the root of an empty
    /// tree. A failed insertion leaves the tree unchanged.
    ///
    /// # Errors
    ///
    /// - `DuplicateVendor` if the vendor id is already present
    /// - `RootAlreadySet` if a root candidate arrives after the root
    /// - `ParentNotFound` if no node holds `parent_id`
    /// - `DepthLimitExceeded` if the new node would exceed the depth ceiling
    pub fn insert(
        &mut self,
        mut vendor: Vendor,
        parent_id: VendorId,
    ) -> Result<NodeId, HierarchyError> {
        let cedula = vendor.cedula();
        if self.index.contains_key(&cedula) {
            return Err(HierarchyError::duplicate_vendor(cedula));
        }

        if parent_id == NO_PARENT {
            if let Some(root) = self.root_node() {
                return Err(HierarchyError::root_already_set(
                    cedula,
                    root.vendor().cedula(),
                ));
            }

            vendor.set_parent_id(NO_PARENT);
            let id = self.push(vendor, 0);
            self.root = Some(id);
            return Ok(id);
        }

        let parent = self
            .find(parent_id)
            .ok_or_else(|| HierarchyError::parent_not_found(cedula, parent_id))?;

        let depth = self.node(parent).depth() + 1;
        if depth > self.config.max_depth {
            return Err(HierarchyError::depth_limit_exceeded(
                cedula,
                depth,
                self.config.max_depth,
            ));
        }

        vendor.set_parent_id(parent_id);
        let id = self.push(vendor, depth);
        self.node_mut(parent).push_child(id);
        Ok(id)
    }

    /// Build the tree from records in arbitrary order
    ///
    /// Records whose `parent_id` equals `root_parent_id` are root candidates;
    /// with any other sentinel a `parent_id` of [`NO_PARENT`] never resolves.
    /// Pending records are swept until all are placed or a sweep places none.
    /// Records that hit a permanent error (duplicate id, second root, depth
    /// ceiling) are dropped straight away; the rest are dropped when the
    /// sweeps stop. Dropped records are handled according to
    /// [`HierarchyConfig::unresolved_records`].
    ///
    /// # Errors
    ///
    /// `UnresolvedRecords` when records were dropped under
    /// [`UnresolvedRecordPolicy::Reject`]. The error carries the dropped
    /// records and their reasons. Placed records stay in the tree.
    pub fn insert_nodes_from_list<I>(
        &mut self,
        records: I,
        root_parent_id: VendorId,
    ) -> Result<BulkInsertReport, HierarchyError>
    where
        I: IntoIterator<Item = VendorRecord>,
    {
        let mut pending: Vec<VendorRecord> = records.into_iter().collect();
        let mut report = BulkInsertReport::default();

        while !pending.is_empty() {
            report.sweeps += 1;
            let before = pending.len();
            let mut unresolved = Vec::with_capacity(before);
            let mut placed = 0;

            for record in pending {
                let parent_id = if record.parent_id == root_parent_id {
                    NO_PARENT
                } else if record.parent_id != NO_PARENT
                    && self.index.contains_key(&record.parent_id)
                {
                    record.parent_id
                } else {
                    // Parent not placed yet, or NO_PARENT under a custom sentinel
                    unresolved.push(record);
                    continue;
                };

                match self.insert(Vendor::from(&record), parent_id) {
                    Ok(_) => placed += 1,
                    Err(reason) => report.dropped.push(DroppedRecord { record, reason }),
                }
            }

            report.inserted += placed;
            tracing::debug!(
                "Sweep {} placed {} record(s), {} pending",
                report.sweeps,
                placed,
                unresolved.len()
            );

            pending = unresolved;
            if pending.len() == before {
                break;
            }
        }

        for record in pending {
            let reason = HierarchyError::parent_not_found(record.cedula, record.parent_id);
            report.dropped.push(DroppedRecord { record, reason });
        }

        tracing::info!(
            "Bulk insertion placed {} vendor(s) in {} sweep(s), dropped {}",
            report.inserted,
            report.sweeps,
            report.dropped_count()
        );

        if !report.dropped.is_empty() {
            match self.config.unresolved_records {
                UnresolvedRecordPolicy::Discard => {}
                UnresolvedRecordPolicy::Warn => {
                    for dropped in &report.dropped {
                        tracing::warn!(
                            "Dropped vendor {} ({}): {}",
                            dropped.record.cedula,
                            dropped.record.name,
                            dropped.reason
                        );
                    }
                }
                UnresolvedRecordPolicy::Reject => {
                    return Err(HierarchyError::unresolved_records(report.dropped));
                }
            }
        }

        Ok(report)
    }

    /// Export records for every vendor, root first, in depth-first order
    pub fn reports(&self) -> Vec<VendorReport> {
        match self.root {
            Some(root) => self
                .subtree(root)
                .into_iter()
                .map(|id| self.node(id).vendor().to_report())
                .collect(),
            None => Vec::new(),
        }
    }

    fn push(&mut self, vendor: Vendor, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.index.insert(vendor.cedula(), id);
        self.nodes.push(TreeNode::new(vendor, depth));
        id
    }
}
