//! Hierarchy Error Types
//!
//! Errors raised while building or processing a vendor [`Tree`](crate::tree::Tree).
//! Construction errors reject a single vendor and leave the tree untouched.

use crate::models::VendorId;
use crate::tree::DroppedRecord;
use thiserror::Error;

/// Errors from tree construction and the assignment passes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HierarchyError {
    /// The operation needs a root but the tree is empty
    #[error("Tree is empty")]
    EmptyTree,

    /// The declared parent is not (yet) part of the tree
    #[error("Parent {parent_id} of vendor {cedula} not found")]
    ParentNotFound { cedula: VendorId, parent_id: VendorId },

    /// A vendor with the same id is already part of the tree
    #[error("Vendor {cedula} already exists")]
    DuplicateVendor { cedula: VendorId },

    /// A second vendor without parent was offered as root
    #[error("Vendor {cedula} cannot become root: root {root} already set")]
    RootAlreadySet { cedula: VendorId, root: VendorId },

    /// Attaching the vendor would exceed the configured depth ceiling
    #[error("Vendor {cedula} would sit at depth {depth}, maximum is {max_depth}")]
    DepthLimitExceeded {
        cedula: VendorId,
        depth: usize,
        max_depth: usize,
    },

    /// Bulk insertion finished with records that could not be placed
    #[error("{} record(s) could not be placed in the tree", .dropped.len())]
    UnresolvedRecords { dropped: Vec<DroppedRecord> },

    /// Configuration could not be read
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HierarchyError {
    /// Create a parent not found error
    pub fn parent_not_found(cedula: VendorId, parent_id: VendorId) -> Self {
        Self::ParentNotFound { cedula, parent_id }
    }

    /// Create a duplicate vendor error
    pub fn duplicate_vendor(cedula: VendorId) -> Self {
        Self::DuplicateVendor { cedula }
    }

    /// Create a root already set error
    pub fn root_already_set(cedula: VendorId, root: VendorId) -> Self {
        Self::RootAlreadySet { cedula, root }
    }

    /// Create a depth limit error
    pub fn depth_limit_exceeded(cedula: VendorId, depth: usize, max_depth: usize) -> Self {
        Self::DepthLimitExceeded {
            cedula,
            depth,
            max_depth,
        }
    }

    /// Create an unresolved records error
    pub fn unresolved_records(dropped: Vec<DroppedRecord>) -> Self {
        Self::UnresolvedRecords { dropped }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
